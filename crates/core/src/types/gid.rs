//! Shopify global ID type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Gid`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GidError {
    /// The input string is empty.
    #[error("gid cannot be empty")]
    Empty,
    /// The input does not start with `gid://shopify/`.
    #[error("gid must start with {prefix}")]
    MissingPrefix {
        /// Required prefix.
        prefix: &'static str,
    },
    /// The resource type segment is empty.
    #[error("gid resource type cannot be empty")]
    EmptyResourceType,
    /// The resource ID segment is empty.
    #[error("gid resource id cannot be empty")]
    EmptyResourceId,
}

/// A Shopify global ID, e.g. `gid://shopify/Product/9818390004021`.
///
/// ## Constraints
///
/// - Must start with `gid://shopify/`
/// - Must contain a non-empty resource type and a non-empty resource id
///
/// ## Examples
///
/// ```
/// use naked_pineapple_core::Gid;
///
/// let gid = Gid::parse("gid://shopify/Product/9818390004021").unwrap();
/// assert_eq!(gid.resource_type(), "Product");
/// assert_eq!(gid.resource_id(), "9818390004021");
///
/// assert!(Gid::parse("").is_err());
/// assert!(Gid::parse("Product/1").is_err());
/// assert!(Gid::parse("gid://shopify/Product/").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Gid(String);

impl Gid {
    /// Prefix shared by every Shopify global ID.
    pub const PREFIX: &'static str = "gid://shopify/";

    /// Parse a `Gid` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, lacks the `gid://shopify/`
    /// prefix, or has an empty resource type or id.
    pub fn parse(s: &str) -> Result<Self, GidError> {
        if s.is_empty() {
            return Err(GidError::Empty);
        }

        let rest = s.strip_prefix(Self::PREFIX).ok_or(GidError::MissingPrefix {
            prefix: Self::PREFIX,
        })?;

        let (resource_type, resource_id) = rest.split_once('/').unwrap_or((rest, ""));

        if resource_type.is_empty() {
            return Err(GidError::EmptyResourceType);
        }

        if resource_id.is_empty() {
            return Err(GidError::EmptyResourceId);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the global ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Gid` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the resource type (e.g. `Product`, `BulkOperation`).
    #[must_use]
    pub fn resource_type(&self) -> &str {
        self.0
            .get(Self::PREFIX.len()..)
            .and_then(|rest| rest.split('/').next())
            .unwrap_or("")
    }

    /// Returns everything after the resource type, including any query string.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        self.0
            .get(Self::PREFIX.len()..)
            .and_then(|rest| rest.split_once('/'))
            .map_or("", |(_, id)| id)
    }
}

impl fmt::Display for Gid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Gid {
    type Err = GidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Gid {
    type Error = GidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Gid> for String {
    fn from(gid: Gid) -> Self {
        gid.0
    }
}

impl AsRef<str> for Gid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_gids() {
        assert!(Gid::parse("gid://shopify/Product/9818390004021").is_ok());
        assert!(Gid::parse("gid://shopify/BulkOperation/1").is_ok());
        assert!(Gid::parse("gid://shopify/WebhookSubscription/42").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Gid::parse(""), Err(GidError::Empty));
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert!(matches!(
            Gid::parse("Product/1"),
            Err(GidError::MissingPrefix { .. })
        ));
        assert!(matches!(
            Gid::parse("gid://other/Product/1"),
            Err(GidError::MissingPrefix { .. })
        ));
    }

    #[test]
    fn test_parse_empty_segments() {
        assert_eq!(
            Gid::parse("gid://shopify//1"),
            Err(GidError::EmptyResourceType)
        );
        assert_eq!(
            Gid::parse("gid://shopify/Product"),
            Err(GidError::EmptyResourceId)
        );
        assert_eq!(
            Gid::parse("gid://shopify/Product/"),
            Err(GidError::EmptyResourceId)
        );
    }

    #[test]
    fn test_segments() {
        let gid = Gid::parse("gid://shopify/BulkOperation/720918").unwrap();
        assert_eq!(gid.resource_type(), "BulkOperation");
        assert_eq!(gid.resource_id(), "720918");
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let gid: Gid = serde_json::from_str("\"gid://shopify/Product/1\"").unwrap();
        assert_eq!(gid.as_str(), "gid://shopify/Product/1");
        assert_eq!(
            serde_json::to_string(&gid).unwrap(),
            "\"gid://shopify/Product/1\""
        );

        let bad: Result<Gid, _> = serde_json::from_str("\"Product/1\"");
        assert!(bad.is_err());
    }
}
