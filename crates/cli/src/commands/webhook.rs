//! Webhook subscription command.
//!
//! # Usage
//!
//! ```bash
//! np-bulk webhook
//! ```
//!
//! # Environment Variables
//!
//! - `BULK_WEBHOOK_CALLBACK_URL` - URL Shopify delivers `BULK_OPERATIONS_FINISH` to

use naked_pineapple_bulk::config::BulkConfig;
use naked_pineapple_bulk::shopify::{
    AdminClient, BULK_OPERATIONS_FINISH_TOPIC, EnsuredWebhook, format_user_errors,
};

use super::CommandError;

/// Ensure the `BULK_OPERATIONS_FINISH` subscription exists, using a fresh client.
pub async fn execute(config: &BulkConfig) -> Result<String, CommandError> {
    let client = AdminClient::new(&config.shopify)?;
    ensure(config, &client).await
}

/// Ensure the `BULK_OPERATIONS_FINISH` subscription exists and return its ID.
pub async fn ensure(config: &BulkConfig, client: &AdminClient) -> Result<String, CommandError> {
    let callback_url = config.require_webhook_callback_url()?;

    match client
        .ensure_webhook_subscription(BULK_OPERATIONS_FINISH_TOPIC, callback_url.as_str())
        .await?
    {
        EnsuredWebhook::Existing(sub) => {
            tracing::info!(webhook_id = %sub.id, "Using existing webhook");
            Ok(sub.id)
        }
        EnsuredWebhook::Created(sub) => {
            tracing::info!(webhook_id = %sub.id, callback_url = %callback_url, "Webhook created");
            Ok(sub.id)
        }
        EnsuredWebhook::Rejected(user_errors) => {
            Err(CommandError::Rejected(format_user_errors(&user_errors)))
        }
    }
}
