//! Naked Pineapple Core - Shared types library.
//!
//! This crate provides the types used by the bulk loader components:
//! - `bulk` - Shopify Admin API client and bulk mutation workflow
//! - `cli` - The `np-bulk` command-line tool
//!
//! # Architecture
//!
//! The core crate contains only types and pure encoding - no I/O, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopify global IDs, metafield inputs, bulk mutation kinds
//! - [`jsonl`] - JSONL encoding of bulk mutation variables

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod jsonl;
pub mod types;

pub use jsonl::{encode_jsonl, encode_metafields_jsonl};
pub use types::*;
