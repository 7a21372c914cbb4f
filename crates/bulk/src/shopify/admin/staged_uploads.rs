//! Staged upload operations for the Admin API.

use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::{AdminClient, AdminShopifyError, queries};
use crate::shopify::types::{StagedUploadTarget, UserError, format_user_errors};

/// Filename requested for bulk mutation variable uploads.
const BULK_VARIABLES_FILENAME: &str = "bulk_op_vars";

/// MIME type requested for bulk mutation variable uploads.
const BULK_VARIABLES_MIME_TYPE: &str = "text/jsonl";

/// Part filename for payloads built in memory.
const DEFAULT_INLINE_FILENAME: &str = "metafields.jsonl";

/// Content type for payloads built in memory.
const INLINE_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Form field carrying the file; always the last part of the form.
const FILE_FIELD: &str = "file";

/// The JSONL body of a staged upload.
#[derive(Debug, Clone)]
pub enum UploadPayload {
    /// Stream a file from disk.
    File(PathBuf),
    /// Send a buffer built in memory.
    Inline {
        /// Filename reported in the multipart part.
        filename: String,
        /// JSONL bytes.
        bytes: Vec<u8>,
    },
}

impl UploadPayload {
    /// Upload the file at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Upload an in-memory JSONL document as `metafields.jsonl`.
    #[must_use]
    pub fn inline_jsonl(jsonl: String) -> Self {
        Self::Inline {
            filename: DEFAULT_INLINE_FILENAME.to_string(),
            bytes: jsonl.into_bytes(),
        }
    }

    /// Build the multipart `file` part.
    async fn into_part(self) -> Result<Part, AdminShopifyError> {
        match self {
            Self::File(path) => {
                let file = tokio::fs::File::open(&path).await?;
                let length = file.metadata().await?.len();
                let filename = path.file_name().map_or_else(
                    || format!("{BULK_VARIABLES_FILENAME}.jsonl"),
                    |name| name.to_string_lossy().into_owned(),
                );

                Ok(Part::stream_with_length(file, length)
                    .file_name(filename)
                    .mime_str(BULK_VARIABLES_MIME_TYPE)?)
            }
            Self::Inline { filename, bytes } => Ok(Part::bytes(bytes)
                .file_name(filename)
                .mime_str(INLINE_CONTENT_TYPE)?),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StagedUploadsCreateData {
    staged_uploads_create: Option<StagedUploadsCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StagedUploadsCreatePayload {
    #[serde(default)]
    user_errors: Vec<UserError>,
    #[serde(default)]
    staged_targets: Option<Vec<StagedUploadTarget>>,
}

impl AdminClient {
    /// Request a staged upload target for bulk mutation variables.
    ///
    /// User errors are logged, not raised; only the absence of a target fails.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::NoStagedTarget` if Shopify returned no target.
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn create_bulk_variables_upload(
        &self,
    ) -> Result<StagedUploadTarget, AdminShopifyError> {
        let variables = json!({
            "input": [{
                "resource": "BULK_MUTATION_VARIABLES",
                "filename": BULK_VARIABLES_FILENAME,
                "mimeType": BULK_VARIABLES_MIME_TYPE,
                "httpMethod": "POST",
            }],
        });

        let data: StagedUploadsCreateData = self
            .execute(queries::STAGED_UPLOADS_CREATE, variables)
            .await?;

        let payload = data
            .staged_uploads_create
            .ok_or(AdminShopifyError::MissingField("stagedUploadsCreate"))?;

        if !payload.user_errors.is_empty() {
            tracing::warn!(
                user_errors = %format_user_errors(&payload.user_errors),
                "stagedUploadsCreate returned user errors"
            );
        }

        let target = payload
            .staged_targets
            .and_then(|targets| targets.into_iter().next())
            .ok_or(AdminShopifyError::NoStagedTarget)?;

        tracing::info!(
            url = %target.url,
            parameters = target.parameters.len(),
            "Staged upload target created"
        );

        Ok(target)
    }

    /// Upload a payload to a staged upload target.
    ///
    /// Every target parameter becomes a text field, in order, and the payload
    /// is appended last as the `file` field. The access token is not sent.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Upload` with the response body on a non-2xx status.
    /// Returns `AdminShopifyError::Io` if a file payload cannot be read.
    /// Returns `AdminShopifyError::Http` on network failures.
    #[instrument(skip(self, target, payload), fields(url = %target.url))]
    pub async fn upload_staged_file(
        &self,
        target: &StagedUploadTarget,
        payload: UploadPayload,
    ) -> Result<(), AdminShopifyError> {
        let form = target
            .parameters
            .iter()
            .fold(Form::new(), |form, param| {
                form.text(param.name.clone(), param.value.clone())
            })
            .part(FILE_FIELD, payload.into_part().await?);

        let response = self
            .inner
            .client
            .post(&target.url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(AdminShopifyError::Upload {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(status = status.as_u16(), "File uploaded successfully");
        Ok(())
    }
}

/// Body of a rejected upload, or the reason it could not be read.
fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to read upload error response body");
        format!("<unreadable response body: {e}>")
    })
}
