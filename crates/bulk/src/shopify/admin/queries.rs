//! GraphQL documents for the Shopify Admin API.
//!
//! Every document takes its inputs as GraphQL variables; nothing is
//! interpolated into the query text.

// =============================================================================
// Staged uploads
// =============================================================================

/// Request staged upload targets.
pub const STAGED_UPLOADS_CREATE: &str = r"
mutation StagedUploadsCreate($input: [StagedUploadInput!]!) {
  stagedUploadsCreate(input: $input) {
    userErrors {
      field
      message
    }
    stagedTargets {
      url
      resourceUrl
      parameters {
        name
        value
      }
    }
  }
}
";

// =============================================================================
// Bulk operations
// =============================================================================

/// Start a bulk mutation over a staged JSONL upload.
pub const BULK_OPERATION_RUN_MUTATION: &str = r"
mutation BulkOperationRunMutation($mutation: String!, $stagedUploadPath: String!) {
  bulkOperationRunMutation(mutation: $mutation, stagedUploadPath: $stagedUploadPath) {
    bulkOperation {
      id
      url
      status
      errorCode
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Look up one bulk operation by ID.
pub const GET_BULK_OPERATION: &str = r"
query GetBulkOperation($id: ID!) {
  node(id: $id) {
    ... on BulkOperation {
      id
      status
      errorCode
      url
      objectCount
      createdAt
      completedAt
    }
  }
}
";

// =============================================================================
// Webhook subscriptions
// =============================================================================

/// List webhook subscriptions for the given topics.
pub const GET_WEBHOOK_SUBSCRIPTIONS: &str = r"
query GetWebhookSubscriptions($first: Int!, $topics: [WebhookSubscriptionTopic!]) {
  webhookSubscriptions(first: $first, topics: $topics) {
    edges {
      node {
        id
        topic
        callbackUrl
      }
    }
  }
}
";

/// Create a JSON webhook subscription.
pub const WEBHOOK_SUBSCRIPTION_CREATE: &str = r"
mutation WebhookSubscriptionCreate($topic: WebhookSubscriptionTopic!, $webhookSubscription: WebhookSubscriptionInput!) {
  webhookSubscriptionCreate(topic: $topic, webhookSubscription: $webhookSubscription) {
    userErrors {
      field
      message
    }
    webhookSubscription {
      id
      topic
      callbackUrl
    }
  }
}
";
