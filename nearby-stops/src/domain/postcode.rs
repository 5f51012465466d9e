//! Postcode type.

use std::fmt;

/// A UK postcode with all whitespace removed.
///
/// No further validation is done: a malformed code is forwarded to the
/// geocoding service, which is the authority on what exists.
///
/// # Examples
///
/// ```
/// use nearby_stops::domain::PostalCode;
///
/// let code = PostalCode::normalize(" SW1A 1AA\n");
/// assert_eq!(code.as_str(), "SW1A1AA");
///
/// // Empty input is passed through as an empty code
/// assert!(PostalCode::normalize("   ").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    /// Build a postcode from raw user input by stripping every whitespace character.
    pub fn normalize(raw: &str) -> Self {
        PostalCode(raw.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Returns the normalized code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
