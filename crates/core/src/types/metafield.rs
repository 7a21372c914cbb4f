//! Metafield input records for `metafieldsSet`.

use serde::{Deserialize, Serialize};

use super::Gid;

/// One metafield to set on a resource.
///
/// Serialises to the shape of Shopify's `MetafieldsSetInput`:
///
/// ```json
/// {"key":"color","namespace":"product_info","ownerId":"gid://shopify/Product/1","value":"Red","type":"single_line_text_field"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldInput {
    /// Metafield key, unique within its namespace.
    pub key: String,
    /// Namespace grouping related metafields.
    pub namespace: String,
    /// Resource the metafield is attached to (e.g. a product).
    pub owner_id: Gid,
    /// Value, always sent as a string.
    pub value: String,
    /// Metafield type name (e.g. `single_line_text_field`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl MetafieldInput {
    /// Create a `single_line_text_field` metafield.
    #[must_use]
    pub fn single_line_text(
        owner_id: Gid,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            namespace: namespace.into(),
            owner_id,
            value: value.into(),
            kind: "single_line_text_field".to_owned(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_shopify_field_names() {
        let owner = Gid::parse("gid://shopify/Product/9818390004021").unwrap();
        let metafield = MetafieldInput::single_line_text(owner, "product_info", "color", "Red");

        let value = serde_json::to_value(&metafield).unwrap();
        assert_eq!(value["ownerId"], "gid://shopify/Product/9818390004021");
        assert_eq!(value["type"], "single_line_text_field");
        assert_eq!(value["namespace"], "product_info");
        assert!(value.get("owner_id").is_none());
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_rejects_invalid_owner_id() {
        let json = r#"{"key":"k","namespace":"n","ownerId":"123","value":"v","type":"t"}"#;
        let result: Result<MetafieldInput, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
