//! Types returned by the Shopify Admin API calls this crate makes.

use naked_pineapple_core::BulkOperationStatus;
use serde::{Deserialize, Serialize};

use super::AdminShopifyError;

/// Name of the staged upload parameter holding the storage key.
pub const STORAGE_KEY_PARAMETER: &str = "key";

/// A user error from a mutation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field, if any.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) if !field.is_empty() => write!(f, "{}: {}", field.join("."), self.message),
            _ => write!(f, "{}", self.message),
        }
    }
}

/// Join user errors into one line for logging.
#[must_use]
pub fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One form parameter the staged upload URL requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedUploadParameter {
    /// Form field name.
    pub name: String,
    /// Form field value.
    pub value: String,
}

/// Staged upload target for file uploads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedUploadTarget {
    /// The URL to upload the file to.
    pub url: String,
    /// The resource URL after upload completes.
    #[serde(default)]
    pub resource_url: Option<String>,
    /// Form parameters to include with the upload, in order.
    pub parameters: Vec<StagedUploadParameter>,
}

impl StagedUploadTarget {
    /// The storage key of the uploaded object, used as `stagedUploadPath`.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::MissingField` if no parameter is named `key`.
    pub fn storage_key(&self) -> Result<&str, AdminShopifyError> {
        self.parameters
            .iter()
            .find(|p| p.name == STORAGE_KEY_PARAMETER)
            .map(|p| p.value.as_str())
            .ok_or(AdminShopifyError::MissingField(STORAGE_KEY_PARAMETER))
    }
}

/// A bulk operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperation {
    /// Bulk operation ID (e.g., `gid://shopify/BulkOperation/1`).
    pub id: String,
    /// Current status.
    pub status: BulkOperationStatus,
    /// URL of the result JSONL, once completed.
    #[serde(default)]
    pub url: Option<String>,
    /// Error code if the operation failed.
    #[serde(default)]
    pub error_code: Option<String>,
    /// Number of objects processed so far (UnsignedInt64 as string).
    #[serde(default)]
    pub object_count: Option<String>,
    /// When the operation was created.
    #[serde(default)]
    pub created_at: Option<String>,
    /// When the operation finished.
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Result of starting a bulk mutation.
///
/// `userErrors` are data here, not errors: Shopify may reject the mutation
/// without failing the request.
#[derive(Debug, Clone, Default)]
pub struct BulkMutationLaunch {
    /// The started operation, absent when Shopify rejected the request.
    pub operation: Option<BulkOperation>,
    /// User errors reported by `bulkOperationRunMutation`.
    pub user_errors: Vec<UserError>,
}

/// A webhook subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscription {
    /// Subscription ID.
    pub id: String,
    /// Webhook topic (e.g., `BULK_OPERATIONS_FINISH`).
    #[serde(default)]
    pub topic: Option<String>,
    /// Delivery URL.
    #[serde(default)]
    pub callback_url: Option<String>,
}

/// Outcome of making sure a webhook subscription exists.
#[derive(Debug, Clone)]
pub enum EnsuredWebhook {
    /// A subscription for the topic already existed; the first one is reused.
    Existing(WebhookSubscription),
    /// No subscription existed and one was created.
    Created(WebhookSubscription),
    /// Creation was rejected with user errors.
    Rejected(Vec<UserError>),
}

impl EnsuredWebhook {
    /// The subscription ID, if one exists.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Existing(sub) | Self::Created(sub) => Some(sub.id.as_str()),
            Self::Rejected(_) => None,
        }
    }
}
