//! The validated book number entity

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::check13;
use crate::error::IsbnError;
use crate::formatter;
use crate::parser;

/// GS1 "Bookland" prefix shared by every identifier with an ISBN-10 form.
pub(crate) const GS1_978: [u8; 3] = [9, 7, 8];
pub(crate) const GS1_979: [u8; 3] = [9, 7, 9];

/// A structurally valid book number, held in canonical ISBN-13 layout.
///
/// Thirteen digit values: the GS1 prefix (978 or 979), the body of the
/// source form, and the source form's validated check digit. The stored
/// check digit may be 10 (the letter 'X') when the input was an SBN or
/// ISBN-10; renderers never reuse it across forms and always recompute the
/// check digit with the modulus of the requested output form.
///
/// An `Isbn` is created only by a successful parse and is immutable.
#[derive(Debug, Clone)]
pub struct Isbn {
    digits: [u8; 13],
}

impl Isbn {
    pub(crate) fn from_digits(digits: [u8; 13]) -> Self {
        Isbn { digits }
    }

    /// The thirteen stored digit values.
    ///
    /// The final entry is the check digit of the *source* form; use the
    /// conversion methods for output whose check digit matches the target
    /// form.
    pub fn digits(&self) -> &[u8; 13] {
        &self.digits
    }

    /// The GS1 prefix as text, `"978"` or `"979"`.
    pub fn gs1_prefix(&self) -> String {
        formatter::render_digits(&self.digits[..3])
    }

    /// The registration group digit (the entry after the GS1 prefix).
    pub fn registration_group(&self) -> u8 {
        self.digits[3]
    }

    /// Render as canonical ISBN-13.
    pub fn to_isbn13(&self) -> String {
        formatter::format_isbn13(self)
    }

    /// Render as ISBN-10. Fails for 979-prefixed identifiers, which have no
    /// ISBN-10 form.
    pub fn to_isbn10(&self) -> Result<String, IsbnError> {
        formatter::format_isbn10(self)
    }

    /// Render as a nine-digit SBN. Fails unless the registration group is 0.
    pub fn to_sbn(&self) -> Result<String, IsbnError> {
        formatter::format_sbn(self)
    }

    /// Structural view of the canonical ISBN-13 form.
    pub fn parts(&self) -> IsbnParts {
        IsbnParts {
            gs1_prefix: self.gs1_prefix(),
            registration_group: formatter::render_digits(&self.digits[3..4]),
            body: formatter::render_digits(&self.digits[4..12]),
            check_digit: formatter::digit_char(check13(&self.digits[..12])),
        }
    }
}

// Identity is the twelve leading digits. The stored 13th entry is residue of
// the source form (base 11 for SBN/ISBN-10 input, base 10 for ISBN-13) and
// must not distinguish the same book parsed from different forms.
impl PartialEq for Isbn {
    fn eq(&self, other: &Self) -> bool {
        self.digits[..12] == other.digits[..12]
    }
}

impl Eq for Isbn {}

impl Hash for Isbn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digits[..12].hash(state);
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_isbn13())
    }
}

/// Structural slices of a canonical ISBN-13.
///
/// The registrant and publication elements are not separated: that split
/// depends on the agency's allocated range tables, which structural
/// validation does not consult. The body is the undifferentiated eight
/// digits between the registration group and the check digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsbnParts {
    pub gs1_prefix: String,
    pub registration_group: String,
    pub body: String,
    pub check_digit: char,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_display_is_canonical_isbn13() {
        let isbn = parse("0-306-40615-2").unwrap();
        assert_eq!(isbn.to_string(), "9780306406157");
    }

    #[test]
    fn test_from_str() {
        let isbn: Isbn = "9780306406157".parse().unwrap();
        assert_eq!(isbn.gs1_prefix(), "978");
        assert_eq!(isbn.registration_group(), 0);
    }

    #[test]
    fn test_equality_ignores_source_form() {
        let from_10: Isbn = "0306406152".parse().unwrap();
        let from_13: Isbn = "9780306406157".parse().unwrap();
        assert_eq!(from_10, from_13);
    }

    #[test]
    fn test_parts_view() {
        let parts = parse("9780306406157").unwrap().parts();
        assert_eq!(parts.gs1_prefix, "978");
        assert_eq!(parts.registration_group, "0");
        assert_eq!(parts.body, "30640615");
        assert_eq!(parts.check_digit, '7');
    }

    #[test]
    fn test_parts_recompute_the_check_digit() {
        // parsed from ISBN-10, so the stored check digit is base 11; the
        // ISBN-13 view must carry the base-10 digit instead
        let parts = parse("0672323567").unwrap().parts();
        assert_eq!(parts.check_digit, '0');
    }
}
