//! Parsing free-form text into validated book numbers
//!
//! The pipeline sanitizes the input, dispatches on digit count, then runs
//! the per-form validation.
//! Sanitization strips a `urn:isbn:` prefix and drops every character that
//! is not a digit or the check letter 'X', so hyphens may sit at arbitrary
//! positions. Rejection happens on the overall input length, the final
//! digit count, and the check digit, never on a single stray character.

use crate::checksum::{check10, check13};
use crate::error::IsbnError;
use crate::formatter::{digit_char, render_digits};
use crate::isbn::{Isbn, GS1_978, GS1_979};

const URN_PREFIX: &str = "urn:isbn:";

/// 13 digits plus up to four hyphens.
const MAX_INPUT_LEN: usize = 17;

/// Parse any supported textual form into a validated [`Isbn`].
///
/// Accepts bare 9/10/13-digit sequences with or without hyphens, an
/// optional leading `urn:isbn:` literal, and a trailing 'X'/'x' as the
/// SBN/ISBN-10 check character.
pub fn parse(text: &str) -> Result<Isbn, IsbnError> {
    let digits = sanitize(text)?;
    match digits.len() {
        // an SBN is an ISBN-10 from registration group 0 with the zero
        // left off
        9 => {
            let mut padded = Vec::with_capacity(10);
            padded.push(0);
            padded.extend_from_slice(&digits);
            parse10(&padded)
        }
        10 => parse10(&digits),
        13 => parse13(&digits),
        length => Err(IsbnError::InvalidLength { length }),
    }
}

/// Map text to digit values: '0'–'9' to their value, 'X'/'x' to 10,
/// everything else dropped.
pub(crate) fn sanitize(text: &str) -> Result<Vec<u8>, IsbnError> {
    let text = text.strip_prefix(URN_PREFIX).unwrap_or(text);
    let length = text.chars().count();
    if length > MAX_INPUT_LEN {
        return Err(IsbnError::TooLong { length });
    }
    Ok(text.chars().filter_map(digit_value).collect())
}

fn digit_value(c: char) -> Option<u8> {
    if let Some(d) = c.to_digit(10) {
        return Some(d as u8);
    }
    if c == 'X' || c == 'x' {
        // 'X' substitutes ten in the base-11 check position of SBNs and
        // ISBN-10s
        return Some(10);
    }
    None
}

/// Validate a 10-entry sequence as an ISBN-10 and lift it to canonical form.
pub(crate) fn parse10(digits: &[u8]) -> Result<Isbn, IsbnError> {
    // a check value of ten is only representable in the final position
    if digits[..9].iter().any(|&d| d > 9) {
        return Err(IsbnError::MisplacedCheckCharacter);
    }
    let expected = check10(digits);
    let found = digits[9];
    if expected != found {
        return Err(IsbnError::Checksum10 {
            expected: digit_char(expected),
            found: digit_char(found),
        });
    }
    let mut body = [0u8; 13];
    body[..3].copy_from_slice(&GS1_978);
    body[3..].copy_from_slice(digits);
    Ok(Isbn::from_digits(body))
}

/// Validate a 13-entry sequence as an ISBN-13.
///
/// Structural validation only: the GS1 prefix and check digit are verified,
/// not whether the number is actually allocated by the ISBN agency.
pub(crate) fn parse13(digits: &[u8]) -> Result<Isbn, IsbnError> {
    if digits[..3] != GS1_978 && digits[..3] != GS1_979 {
        return Err(IsbnError::InvalidPrefix {
            prefix: render_digits(&digits[..3]),
        });
    }
    if digits[..12].iter().any(|&d| d > 9) {
        return Err(IsbnError::MisplacedCheckCharacter);
    }
    let expected = check13(digits);
    let found = digits[12];
    if expected != found {
        return Err(IsbnError::Checksum13 {
            expected: digit_char(expected),
            found: digit_char(found),
        });
    }
    let mut body = [0u8; 13];
    body.copy_from_slice(digits);
    Ok(Isbn::from_digits(body))
}
