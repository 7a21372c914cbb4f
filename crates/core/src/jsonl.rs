//! JSONL encoding of bulk mutation variables.
//!
//! Each record becomes one compact JSON object on its own line, wrapped in
//! the variables envelope of the chosen [`BulkMutationKind`]. Lines are
//! joined with `\n` and there is no trailing newline, so `N` records give
//! exactly `N` lines and zero records give an empty string.

use serde::Serialize;

use crate::types::{BulkMutationKind, MetafieldInput};

/// Encode records as JSONL bulk mutation variables.
///
/// # Errors
///
/// Returns an error if a record cannot be serialised to JSON.
pub fn encode_jsonl<T: Serialize>(
    kind: BulkMutationKind,
    records: &[T],
) -> Result<String, serde_json::Error> {
    let lines = records
        .iter()
        .map(|record| {
            let value = serde_json::to_value(record)?;
            serde_json::to_string(&kind.wrap(value))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

/// Encode metafields as `{"metafields":[item]}` lines for `metafieldsSet`.
///
/// # Errors
///
/// Returns an error if a metafield cannot be serialised to JSON.
pub fn encode_metafields_jsonl(metafields: &[MetafieldInput]) -> Result<String, serde_json::Error> {
    encode_jsonl(BulkMutationKind::MetafieldsSet, metafields)
}
