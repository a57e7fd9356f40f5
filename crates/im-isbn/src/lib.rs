//! Book number validation, normalization, and conversion
//!
//! This crate inspects International Standard Book Numbers (ISBN-10 and
//! ISBN-13) and their predecessor nine-digit Standard Book Numbers (SBN)
//! according to the structural rules of ISO 2108:
//! - Parsing from free-form text: hyphens at arbitrary positions, an
//!   optional `urn:isbn:` prefix, a trailing 'X'/'x' check character
//! - Check digit verification (weighted mod-11 sum for SBN/ISBN-10,
//!   weighted mod-10 sum for ISBN-13)
//! - Conversion between the SBN, ISBN-10, and ISBN-13 forms
//! - ISBN extraction from running text
//!
//! Validation is purely structural: whether a number was actually allocated
//! by the international ISBN agency is not checked.

pub mod checksum;
pub mod error;
pub mod extractors;
pub mod formatter;
pub mod isbn;
pub mod parser;
pub mod validators;

pub use checksum::{check10, check13};
pub use error::IsbnError;
pub use extractors::{extract_isbns, extract_isbns_with_positions, ExtractedIsbn};
pub use formatter::{to_isbn10, to_isbn13, to_sbn};
pub use isbn::{Isbn, IsbnParts};
pub use parser::parse;
pub use validators::{is_valid_isbn, is_valid_isbn10, is_valid_isbn13, is_valid_sbn};
