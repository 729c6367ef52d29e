//! Case-insensitive output format identifiers

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::Error;

/// Format produced when a request does not name one.
pub const DEFAULT_FORMAT: &str = "pdf";

/// Allow-list entry that permits every format.
pub const WILDCARD: &str = "*";

/// An output format identifier such as `pdf` or `png`.
///
/// Equality, ordering and hashing ignore ASCII case, while [`FormatId::as_str`]
/// keeps the spelling the identifier was created with.
#[derive(Debug, Clone)]
pub struct FormatId(String);

impl FormatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The default format (`pdf`).
    pub fn default_format() -> Self {
        Self::new(DEFAULT_FORMAT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form of the identifier.
    pub fn normalized(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Compare against a raw identifier, ignoring case.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    pub fn is_default(&self) -> bool {
        self.matches(DEFAULT_FORMAT)
    }
}

impl PartialEq for FormatId {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for FormatId {}

impl Hash for FormatId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.0.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for FormatId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FormatId {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.0.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.0.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

impl FromStr for FormatId {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyFormat);
        }
        Ok(Self::new(trimmed))
    }
}

impl From<&str> for FormatId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormatId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
