//! Line code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// Maximum length of a line code ("SIR" is the longest in use).
const MAX_LEN: usize = 3;

/// A subway line code such as `A`, `7` or `SIR`.
///
/// Line codes are 1 to 3 uppercase ASCII letters or digits. This type
/// guarantees that any `LineCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use route_server::domain::LineCode;
///
/// let a = LineCode::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// // Lowercase is rejected by the strict parser...
/// assert!(LineCode::parse("a").is_err());
/// // ...but accepted by the normalizing one
/// assert_eq!(LineCode::parse_normalized(" a ").unwrap(), a);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code from a string.
    ///
    /// The input must be 1 to 3 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() || s.len() > MAX_LEN {
            return Err(InvalidLineCode {
                reason: "must be 1 to 3 characters",
            });
        }

        if !s
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidLineCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        Ok(LineCode(s.to_owned()))
    }

    /// Parse user input, trimming whitespace and uppercasing first.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidLineCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the line code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LineCode {
    type Error = InvalidLineCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LineCode> for String {
    fn from(code: LineCode) -> Self {
        code.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
