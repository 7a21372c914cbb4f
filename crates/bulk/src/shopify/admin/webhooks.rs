//! Webhook subscription operations for the Admin API.

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::{AdminClient, AdminShopifyError, queries};
use crate::shopify::types::{EnsuredWebhook, UserError, WebhookSubscription, format_user_errors};

/// Topic Shopify fires when a bulk operation finishes.
pub const BULK_OPERATIONS_FINISH_TOPIC: &str = "BULK_OPERATIONS_FINISH";

/// Subscriptions fetched when checking for an existing one.
const SUBSCRIPTION_PAGE_SIZE: i64 = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetWebhookSubscriptionsData {
    webhook_subscriptions: Option<WebhookSubscriptionConnection>,
}

#[derive(Debug, Deserialize)]
struct WebhookSubscriptionConnection {
    #[serde(default)]
    edges: Vec<WebhookSubscriptionEdge>,
}

#[derive(Debug, Deserialize)]
struct WebhookSubscriptionEdge {
    node: WebhookSubscription,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookSubscriptionCreateData {
    webhook_subscription_create: Option<WebhookSubscriptionCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookSubscriptionCreatePayload {
    #[serde(default)]
    user_errors: Vec<UserError>,
    webhook_subscription: Option<WebhookSubscription>,
}

impl AdminClient {
    /// List webhook subscriptions for a topic (first page only).
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn webhook_subscriptions(
        &self,
        topic: &str,
    ) -> Result<Vec<WebhookSubscription>, AdminShopifyError> {
        let variables = json!({
            "first": SUBSCRIPTION_PAGE_SIZE,
            "topics": [topic],
        });

        let data: GetWebhookSubscriptionsData = self
            .execute(queries::GET_WEBHOOK_SUBSCRIPTIONS, variables)
            .await?;

        let connection = data
            .webhook_subscriptions
            .ok_or(AdminShopifyError::MissingField("webhookSubscriptions"))?;

        Ok(connection.edges.into_iter().map(|edge| edge.node).collect())
    }

    /// Create a JSON-format webhook subscription.
    ///
    /// Returns [`EnsuredWebhook::Created`] or, if Shopify reported user
    /// errors, [`EnsuredWebhook::Rejected`]. Both outcomes are logged here.
    async fn create_webhook_subscription(
        &self,
        topic: &str,
        callback_url: &str,
    ) -> Result<EnsuredWebhook, AdminShopifyError> {
        let variables = json!({
            "topic": topic,
            "webhookSubscription": {
                "format": "JSON",
                "callbackUrl": callback_url,
            },
        });

        let data: WebhookSubscriptionCreateData = self
            .execute(queries::WEBHOOK_SUBSCRIPTION_CREATE, variables)
            .await?;

        let payload = data
            .webhook_subscription_create
            .ok_or(AdminShopifyError::MissingField("webhookSubscriptionCreate"))?;

        if !payload.user_errors.is_empty() {
            tracing::error!(
                user_errors = %format_user_errors(&payload.user_errors),
                "webhookSubscriptionCreate returned user errors"
            );
            return Ok(EnsuredWebhook::Rejected(payload.user_errors));
        }

        let created = payload
            .webhook_subscription
            .ok_or(AdminShopifyError::MissingField("webhookSubscription"))?;
        tracing::info!(webhook_id = %created.id, "Webhook created");
        Ok(EnsuredWebhook::Created(created))
    }

    /// Make sure a subscription exists for `topic`, creating one if needed.
    ///
    /// Reuses the first existing subscription for the topic, whatever its
    /// callback URL. Check-then-create is not atomic: two concurrent runs
    /// can both create one.
    ///
    /// # Errors
    ///
    /// Returns an error if either API request fails. Creation user errors
    /// are returned as [`EnsuredWebhook::Rejected`], not as an error.
    #[instrument(skip(self))]
    pub async fn ensure_webhook_subscription(
        &self,
        topic: &str,
        callback_url: &str,
    ) -> Result<EnsuredWebhook, AdminShopifyError> {
        if let Some(existing) = self.webhook_subscriptions(topic).await?.into_iter().next() {
            tracing::info!(
                webhook_id = %existing.id,
                "Webhook already exists for topic, reusing it"
            );
            return Ok(EnsuredWebhook::Existing(existing));
        }

        self.create_webhook_subscription(topic, callback_url).await
    }
}
