//! Boolean validity checks
//!
//! Thin predicates over the parser for callers that only need a yes/no
//! answer, such as form validation or extraction filtering.

use crate::parser::{parse, parse10, parse13, sanitize};

/// Whether `text` is a structurally valid book number in any supported form
/// (SBN, ISBN-10, or ISBN-13).
pub fn is_valid_isbn(text: &str) -> bool {
    parse(text).is_ok()
}

/// Whether `text` is a structurally valid nine-digit SBN.
pub fn is_valid_sbn(text: &str) -> bool {
    match sanitize(text) {
        Ok(digits) if digits.len() == 9 => {
            let mut padded = Vec::with_capacity(10);
            padded.push(0);
            padded.extend_from_slice(&digits);
            parse10(&padded).is_ok()
        }
        _ => false,
    }
}

/// Whether `text` is a structurally valid ten-digit ISBN-10.
pub fn is_valid_isbn10(text: &str) -> bool {
    matches!(sanitize(text), Ok(digits) if digits.len() == 10 && parse10(&digits).is_ok())
}

/// Whether `text` is a structurally valid thirteen-digit ISBN-13.
pub fn is_valid_isbn13(text: &str) -> bool {
    matches!(sanitize(text), Ok(digits) if digits.len() == 13 && parse13(&digits).is_ok())
}
