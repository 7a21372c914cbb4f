//! Bulk operation management for the Admin API.

use naked_pineapple_core::BulkMutationKind;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::{AdminClient, AdminShopifyError, queries};
use crate::shopify::types::{BulkMutationLaunch, BulkOperation, UserError, format_user_errors};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkOperationRunMutationData {
    bulk_operation_run_mutation: Option<BulkOperationRunMutationPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BulkOperationRunMutationPayload {
    bulk_operation: Option<BulkOperation>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
struct GetBulkOperationData {
    node: Option<serde_json::Value>,
}

impl AdminClient {
    /// Start a bulk mutation over an uploaded JSONL file.
    ///
    /// User errors are logged and returned in the launch result rather than
    /// raised. The operation runs asynchronously; this does not wait for it.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which mutation to run per JSONL line
    /// * `staged_upload_path` - Storage key of the uploaded variables file
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the payload is missing.
    #[instrument(skip(self), fields(kind = %kind))]
    pub async fn run_bulk_mutation(
        &self,
        kind: BulkMutationKind,
        staged_upload_path: &str,
    ) -> Result<BulkMutationLaunch, AdminShopifyError> {
        let variables = json!({
            "mutation": kind.mutation(),
            "stagedUploadPath": staged_upload_path,
        });

        let data: BulkOperationRunMutationData = self
            .execute(queries::BULK_OPERATION_RUN_MUTATION, variables)
            .await?;

        let payload = data
            .bulk_operation_run_mutation
            .ok_or(AdminShopifyError::MissingField("bulkOperationRunMutation"))?;

        if payload.user_errors.is_empty() {
            if let Some(op) = &payload.bulk_operation {
                tracing::info!(
                    bulk_operation_id = %op.id,
                    status = %op.status,
                    "Bulk operation started"
                );
            }
        } else {
            tracing::error!(
                user_errors = %format_user_errors(&payload.user_errors),
                "bulkOperationRunMutation returned user errors"
            );
        }

        Ok(BulkMutationLaunch {
            operation: payload.bulk_operation,
            user_errors: payload.user_errors,
        })
    }

    /// Get a bulk operation by ID.
    ///
    /// # Arguments
    ///
    /// * `id` - Bulk operation ID (e.g., `gid://shopify/BulkOperation/123`)
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::NotFound` if the ID does not resolve to a bulk operation.
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(bulk_operation_id = %id))]
    pub async fn bulk_operation(&self, id: &str) -> Result<BulkOperation, AdminShopifyError> {
        let data: GetBulkOperationData = self
            .execute(queries::GET_BULK_OPERATION, json!({ "id": id }))
            .await?;

        // A node of another type matches no fragment fields and comes back as `{}`
        match data.node {
            Some(node) if node.get("id").is_some() => Ok(serde_json::from_value(node)?),
            _ => Err(AdminShopifyError::NotFound(id.to_string())),
        }
    }
}
