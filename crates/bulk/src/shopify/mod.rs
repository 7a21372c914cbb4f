//! Shopify Admin API client (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **CRITICAL: This module handles the high-privilege Shopify Admin API token.**
//!
//! The token is held as a `SecretString` and only exposed when building the
//! `X-Shopify-Access-Token` header. It is never sent to the staged upload URL.
//!
//! # Architecture
//!
//! - GraphQL documents are plain strings sent with `{query, variables}` bodies
//! - Responses are deserialised straight into the types in [`types`]
//! - No retries: every error is returned to the caller
//!
//! # Example
//!
//! ```rust,ignore
//! use naked_pineapple_bulk::shopify::{AdminClient, UploadPayload};
//!
//! let client = AdminClient::new(&config.shopify)?;
//!
//! let target = client.create_bulk_variables_upload().await?;
//! client.upload_staged_file(&target, UploadPayload::file("bulk_metafield.jsonl")).await?;
//! let launch = client
//!     .run_bulk_mutation(BulkMutationKind::MetafieldsSet, target.storage_key()?)
//!     .await?;
//! ```

mod admin;
pub mod types;

pub use admin::{AdminClient, BULK_OPERATIONS_FINISH_TOPIC, UploadPayload, queries};
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The GraphQL endpoint answered with a non-success status.
    #[error("Admin API returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: String,
    },

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading the upload payload failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// `stagedUploadsCreate` returned no staged target.
    #[error("No staged target returned by stagedUploadsCreate")]
    NoStagedTarget,

    /// A field the workflow depends on was absent from a response.
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// The staged upload endpoint rejected the file.
    #[error("Staged upload failed with status {status}: {body}")]
    Upload {
        /// HTTP status code.
        status: u16,
        /// Response body (usually an XML error document).
        body: String,
    },
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_shopify_error_display() {
        let err = AdminShopifyError::NotFound("gid://shopify/BulkOperation/1".to_string());
        assert_eq!(err.to_string(), "Not found: gid://shopify/BulkOperation/1");
    }

    #[test]
    fn test_graphql_error_formatting() {
        let errors = vec![
            GraphQLError {
                message: "Field not found".to_string(),
                locations: vec![],
                path: vec![],
            },
            GraphQLError {
                message: "Invalid ID".to_string(),
                locations: vec![],
                path: vec![],
            },
        ];
        let err = AdminShopifyError::GraphQL(errors);
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Field not found; Invalid ID"
        );
    }

    #[test]
    fn test_rate_limited_error() {
        let err = AdminShopifyError::RateLimited(60);
        assert_eq!(err.to_string(), "Rate limited, retry after 60 seconds");
    }

    #[test]
    fn test_no_staged_target_error() {
        let err = AdminShopifyError::NoStagedTarget;
        assert_eq!(
            err.to_string(),
            "No staged target returned by stagedUploadsCreate"
        );
    }

    #[test]
    fn test_missing_field_error() {
        let err = AdminShopifyError::MissingField("key");
        assert_eq!(err.to_string(), "Missing field in response: key");
    }

    #[test]
    fn test_upload_error_carries_body() {
        let err = AdminShopifyError::Upload {
            status: 403,
            body: "<Error><Code>AccessDenied</Code></Error>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Staged upload failed with status 403: <Error><Code>AccessDenied</Code></Error>"
        );
    }
}
