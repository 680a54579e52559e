//! Strongly-typed identifiers used across the catalog.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identifier of a catalogued material (e.g. `B001`).
///
/// Unique by convention only; the catalog never enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialCode(String);

impl MaterialCode {
    /// Build a code from raw text, trimming surrounding whitespace.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MaterialCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MaterialCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MaterialCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MaterialCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<MaterialCode> for String {
    fn from(value: MaterialCode) -> Self {
        value.0
    }
}

impl FromStr for MaterialCode {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_trimmed() {
        let code = MaterialCode::new("  B001 ");
        assert_eq!(code.as_str(), "B001");
        assert_eq!(code.to_string(), "B001");
    }

    #[test]
    fn empty_code_is_allowed() {
        assert_eq!(MaterialCode::from("   ").as_str(), "");
    }
}
