//! Opaque customer identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a customer record by the Directory Service.
///
/// The value is opaque to clients (the service currently issues UUID strings)
/// and immutable once assigned. Wrapping it in a newtype prevents mixing it
/// up with other stringly-typed fields such as usernames.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Create an ID from the value the Directory Service returned.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let id = CustomerId::new("3d8cba74-9f0a-4c6f-9d1e-0b5a3f2e6c21");
        assert_eq!(id.to_string(), "3d8cba74-9f0a-4c6f-9d1e-0b5a3f2e6c21");
    }

    #[test]
    fn test_serde_transparent() {
        let id = CustomerId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let parsed: CustomerId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
