//! Command implementations.

pub mod run;
pub mod status;
pub mod webhook;

use naked_pineapple_bulk::config::ConfigError;
use naked_pineapple_bulk::shopify::AdminShopifyError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A Shopify request failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// Neither an upload file nor a records file was given.
    #[error("Either --file or --records is required")]
    MissingInput,

    /// The records file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadRecords {
        /// Path of the records file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The records file is not a valid JSON array for the chosen kind.
    #[error("Invalid records in {path}: {source}")]
    InvalidRecords {
        /// Path of the records file.
        path: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Shopify accepted the request but rejected the operation.
    #[error("Rejected by Shopify: {0}")]
    Rejected(String),

    /// The ID given does not name the expected resource type.
    #[error("Expected a {expected} ID, got {actual}")]
    WrongResourceType {
        /// Resource type the command needs.
        expected: &'static str,
        /// ID that was given.
        actual: String,
    },
}
