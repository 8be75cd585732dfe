//! Line identifier type.

use std::fmt;

/// Error returned when parsing an invalid line id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A valid market line identifier.
///
/// Line ids are short uppercase ASCII alphanumeric strings. The market uses
/// both Roman-numeral ids (`LI`..`LV`) and decimal ids (`L1`..`L10`); this
/// type guarantees that any `LineId` value is valid by construction.
///
/// The id doubles as the foreign key between a line's layout and its catalog
/// entry.
///
/// # Examples
///
/// ```
/// use market_nav::domain::LineId;
///
/// let l3 = LineId::parse("L3").unwrap();
/// assert_eq!(l3.as_str(), "L3");
///
/// // Lowercase is rejected
/// assert!(LineId::parse("l3").is_err());
///
/// // Empty ids are rejected
/// assert!(LineId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineId(String);

impl LineId {
    /// Parse a line id from a string.
    ///
    /// The input must be 1 to 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }

        if s.len() > 8 {
            return Err(InvalidLineId {
                reason: "must be at most 8 characters",
            });
        }

        for b in s.bytes() {
            if !b.is_ascii_uppercase() && !b.is_ascii_digit() {
                return Err(InvalidLineId {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
        }

        Ok(LineId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
