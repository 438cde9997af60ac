//! Validated display name used to address a connection.

use std::fmt;

use serde::Serialize;

use crate::error::RelayError;

/// Self-asserted identifier a client registers under.
///
/// Non-empty, case-sensitive, and stored exactly as received: no trimming
/// and no Unicode normalization. A name is not verified against anything;
/// uniqueness among live connections is enforced by the registry
/// (last writer wins), not here. Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validates and wraps a raw name.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::EmptyDisplayName`] if `raw` is the empty string.
    pub fn new(raw: impl Into<String>) -> Result<Self, RelayError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(RelayError::EmptyDisplayName);
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper, returning the inner `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
