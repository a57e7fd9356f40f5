//! Rendering validated book numbers back to their textual forms
//!
//! Every renderer recomputes the check digit with the modulus of the target
//! form: base 10 for ISBN-13, base 11 for ISBN-10 and SBN. The check digit
//! stored on the entity belongs to whichever form was parsed and is never
//! reused across forms; the two algorithms disagree for the same body.

use crate::checksum::{check10, check13};
use crate::error::IsbnError;
use crate::isbn::{Isbn, GS1_978};
use crate::parser::parse;

const DIGIT_CHARS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'X'];

/// Render a digit value, writing ten as the check letter 'X'.
pub(crate) fn digit_char(digit: u8) -> char {
    DIGIT_CHARS[usize::from(digit)]
}

/// Render a slice of digit values as text.
pub(crate) fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&d| digit_char(d)).collect()
}

/// Canonical thirteen-digit form, check digit recomputed base 10.
pub(crate) fn format_isbn13(isbn: &Isbn) -> String {
    let digits = isbn.digits();
    let mut out = render_digits(&digits[..12]);
    out.push(digit_char(check13(&digits[..12])));
    out
}

/// Ten-digit form: the body after the GS1 prefix plus a base-11 check digit.
pub(crate) fn format_isbn10(isbn: &Isbn) -> Result<String, IsbnError> {
    let digits = isbn.digits();
    if digits[..3] != GS1_978 {
        return Err(IsbnError::NoIsbn10Form {
            prefix: render_digits(&digits[..3]),
        });
    }
    let body = &digits[3..12];
    let mut out = render_digits(body);
    out.push(digit_char(check10(body)));
    Ok(out)
}

/// Nine-digit form: the ISBN-10 with its leading group zero dropped.
///
/// An SBN shares its check digit with the equivalent ISBN-10, so it exists
/// only for 978-prefixed identifiers whose registration group is 0.
pub(crate) fn format_sbn(isbn: &Isbn) -> Result<String, IsbnError> {
    let digits = isbn.digits();
    if digits[..3] != GS1_978 {
        return Err(IsbnError::NoIsbn10Form {
            prefix: render_digits(&digits[..3]),
        });
    }
    if digits[3] != 0 {
        return Err(IsbnError::NoSbnForm {
            group: digit_char(digits[3]),
        });
    }
    let mut out = render_digits(&digits[4..12]);
    out.push(digit_char(check10(&digits[3..12])));
    Ok(out)
}

/// Parse `text` and render it as canonical ISBN-13.
pub fn to_isbn13(text: &str) -> Result<String, IsbnError> {
    Ok(parse(text)?.to_isbn13())
}

/// Parse `text` and render it as ISBN-10.
///
/// Fails with [`IsbnError::NoIsbn10Form`] for 979-prefixed identifiers.
pub fn to_isbn10(text: &str) -> Result<String, IsbnError> {
    parse(text)?.to_isbn10()
}

/// Parse `text` and render it as a nine-digit SBN.
///
/// Fails with [`IsbnError::NoSbnForm`] unless the registration group is 0.
pub fn to_sbn(text: &str) -> Result<String, IsbnError> {
    parse(text)?.to_sbn()
}
