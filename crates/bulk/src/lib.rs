//! Naked Pineapple bulk loader library.
//!
//! Drives Shopify's staged upload and bulk mutation protocol:
//!
//! 1. `stagedUploadsCreate` for a `BULK_MUTATION_VARIABLES` slot
//! 2. multipart POST of the JSONL variables to the staged URL
//! 3. `bulkOperationRunMutation` against the uploaded storage key
//! 4. a `BULK_OPERATIONS_FINISH` webhook subscription, created if missing
//!
//! # Security
//!
//! This crate handles the HIGH PRIVILEGE Shopify Admin API access token.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod shopify;
pub mod workflow;

pub use workflow::{BulkRunOutcome, upload_and_run};
