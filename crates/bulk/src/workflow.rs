//! The staged upload → bulk mutation workflow.

use naked_pineapple_core::BulkMutationKind;
use tracing::instrument;

use crate::shopify::{
    AdminClient, AdminShopifyError, BulkMutationLaunch, BulkOperation, UploadPayload, UserError,
};

/// What a completed upload-and-run produced.
#[derive(Debug, Clone)]
pub struct BulkRunOutcome {
    /// Storage key the bulk mutation was pointed at.
    pub staged_upload_path: String,
    /// The started operation, absent when Shopify rejected the request.
    pub operation: Option<BulkOperation>,
    /// User errors reported by `bulkOperationRunMutation`.
    pub user_errors: Vec<UserError>,
}

impl BulkRunOutcome {
    /// Whether Shopify accepted the bulk mutation.
    #[must_use]
    pub fn started(&self) -> bool {
        self.operation.is_some() && self.user_errors.is_empty()
    }
}

/// Stage, upload, and start a bulk mutation.
///
/// Steps run strictly in sequence and the first failure stops the run.
/// The storage key is resolved before the upload so a target without a
/// `key` parameter fails without sending the file.
///
/// # Errors
///
/// Returns `AdminShopifyError::NoStagedTarget` or `MissingField("key")` on
/// malformed staged upload responses, `Upload` if the file is rejected, and
/// any transport error from the three requests.
#[instrument(skip(client, payload), fields(kind = %kind))]
pub async fn upload_and_run(
    client: &AdminClient,
    kind: BulkMutationKind,
    payload: UploadPayload,
) -> Result<BulkRunOutcome, AdminShopifyError> {
    let target = client.create_bulk_variables_upload().await?;
    let staged_upload_path = target.storage_key()?.to_owned();

    client.upload_staged_file(&target, payload).await?;

    let BulkMutationLaunch {
        operation,
        user_errors,
    } = client.run_bulk_mutation(kind, &staged_upload_path).await?;

    Ok(BulkRunOutcome {
        staged_upload_path,
        operation,
        user_errors,
    })
}
