//! Bulk mutation kinds and bulk operation status.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Inner mutation run once per JSONL line for [`BulkMutationKind::ProductCreate`].
const PRODUCT_CREATE_MUTATION: &str = "mutation call($input: ProductInput!) { productCreate(input: $input) { product { id title variants(first: 10) { edges { node { id title inventoryQuantity } } } } userErrors { message field } } }";

/// Inner mutation run once per JSONL line for [`BulkMutationKind::MetafieldsSet`].
const METAFIELDS_SET_MUTATION: &str = "mutation call($metafields: [MetafieldsSetInput!]!) { metafieldsSet(metafields: $metafields) { metafields { key namespace value createdAt updatedAt } userErrors { field message } } }";

/// The mutation a bulk operation runs against every uploaded row.
///
/// Each kind pairs a mutation document with the envelope that one JSONL
/// line must have for that mutation's variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkMutationKind {
    /// `productCreate(input: $input)`; one product per line.
    ProductCreate,
    /// `metafieldsSet(metafields: $metafields)`; one metafield per line.
    MetafieldsSet,
}

impl BulkMutationKind {
    /// The mutation document passed to `bulkOperationRunMutation`.
    #[must_use]
    pub const fn mutation(self) -> &'static str {
        match self {
            Self::ProductCreate => PRODUCT_CREATE_MUTATION,
            Self::MetafieldsSet => METAFIELDS_SET_MUTATION,
        }
    }

    /// Wrap one record in the variables envelope for this mutation.
    #[must_use]
    pub fn wrap(self, record: Value) -> Value {
        match self {
            Self::ProductCreate => json!({ "input": record }),
            Self::MetafieldsSet => json!({ "metafields": [record] }),
        }
    }
}

impl std::fmt::Display for BulkMutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProductCreate => write!(f, "products"),
            Self::MetafieldsSet => write!(f, "metafields"),
        }
    }
}

impl std::str::FromStr for BulkMutationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" | "product_create" => Ok(Self::ProductCreate),
            "metafields" | "metafields_set" => Ok(Self::MetafieldsSet),
            _ => Err(format!("Invalid bulk mutation kind: {s}")),
        }
    }
}

/// Bulk operation status, as reported by Shopify.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulkOperationStatus {
    Created,
    Running,
    Completed,
    Canceling,
    Canceled,
    Failed,
    Expired,
    /// A status value this client does not know about yet.
    #[serde(untagged)]
    Unknown(String),
}

impl BulkOperationStatus {
    /// Whether Shopify has stopped working on the operation.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Canceled | Self::Failed | Self::Expired
        )
    }
}

impl std::fmt::Display for BulkOperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Running => write!(f, "RUNNING"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Canceling => write!(f, "CANCELING"),
            Self::Canceled => write!(f, "CANCELED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Expired => write!(f, "EXPIRED"),
            Self::Unknown(other) => write!(f, "{other}"),
        }
    }
}
