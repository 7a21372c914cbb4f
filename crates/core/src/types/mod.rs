//! Core types for bulk mutation loading.
//!
//! This module provides type-safe wrappers for Shopify domain concepts.

pub mod bulk;
pub mod gid;
pub mod metafield;

pub use bulk::{BulkMutationKind, BulkOperationStatus};
pub use gid::{Gid, GidError};
pub use metafield::MetafieldInput;
