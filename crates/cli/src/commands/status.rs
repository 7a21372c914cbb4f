//! Bulk operation status command.
//!
//! # Usage
//!
//! ```bash
//! np-bulk status gid://shopify/BulkOperation/123
//! ```

use naked_pineapple_bulk::config::BulkConfig;
use naked_pineapple_bulk::shopify::AdminClient;
use naked_pineapple_core::Gid;

use super::CommandError;

const BULK_OPERATION_RESOURCE: &str = "BulkOperation";

/// Look up a bulk operation and log its status.
pub async fn execute(config: &BulkConfig, id: &Gid) -> Result<(), CommandError> {
    if id.resource_type() != BULK_OPERATION_RESOURCE {
        return Err(CommandError::WrongResourceType {
            expected: BULK_OPERATION_RESOURCE,
            actual: id.to_string(),
        });
    }

    let client = AdminClient::new(&config.shopify)?;
    let op = client.bulk_operation(id.as_str()).await?;

    tracing::info!(
        bulk_operation_id = %op.id,
        status = %op.status,
        finished = op.status.is_terminal(),
        object_count = op.object_count.as_deref().unwrap_or("0"),
        error_code = op.error_code.as_deref().unwrap_or("-"),
        result_url = op.url.as_deref().unwrap_or("-"),
        "Bulk operation status"
    );

    Ok(())
}
