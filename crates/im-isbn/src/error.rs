//! Error types for book number parsing and conversion

use thiserror::Error;

/// Errors produced when parsing or converting book numbers.
///
/// Every failure names the specific rule that was violated. Nothing is
/// recovered or retried internally, and there is no partial success:
/// parsing is all-or-nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// Raw input (after any `urn:isbn:` prefix) exceeds 13 digits plus four
    /// hyphens.
    #[error("input too long: {length} characters (maximum 17)")]
    TooLong { length: usize },

    /// Sanitized digit count is not 9 (SBN), 10 (ISBN-10), or 13 (ISBN-13).
    #[error("invalid length: {length} digits (expected 9, 10, or 13)")]
    InvalidLength { length: usize },

    /// 'X' stands for check value ten and is only valid in the final
    /// position of an SBN or ISBN-10.
    #[error("misplaced check character: 'X' is only valid as the final digit")]
    MisplacedCheckCharacter,

    /// A 13-digit sequence must begin with one of the GS1 "Bookland"
    /// prefixes, 978 or 979.
    #[error("invalid GS1 prefix {prefix}: expected 978 or 979")]
    InvalidPrefix { prefix: String },

    /// The supplied ISBN-10/SBN check digit does not close the mod-11 sum.
    #[error("invalid ISBN-10 check digit: expected '{expected}', found '{found}'")]
    Checksum10 { expected: char, found: char },

    /// The supplied ISBN-13 check digit does not close the mod-10 sum.
    #[error("invalid ISBN-13 check digit: expected '{expected}', found '{found}'")]
    Checksum13 { expected: char, found: char },

    /// Only 978-prefixed identifiers have an ISBN-10 form.
    #[error("no ISBN-10 form: GS1 prefix is {prefix}, not 978")]
    NoIsbn10Form { prefix: String },

    /// SBNs only exist for registration group 0.
    #[error("no SBN form: registration group is {group}, not 0")]
    NoSbnForm { group: char },
}
