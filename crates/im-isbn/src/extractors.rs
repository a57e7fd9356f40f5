//! ISBN extraction from running text

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parser::parse;

lazy_static! {
    // Matches 10- and 13-digit forms with optional hyphen/space grouping
    // and an optional label or URN prefix. Candidates still go through the
    // full parser, so near-misses (phone numbers, bad checksums) are
    // filtered out. Bare nine-digit SBNs are too ambiguous in prose and are
    // not matched; parse them explicitly instead.
    static ref ISBN_REGEX: Regex = Regex::new(
        r"(?i)(?:urn:isbn:|isbn(?:-1[03])?[:\s-]*)?(?P<isbn>(?:97[89][- ]?)?(?:\d[- ]?){9}[\dxX])"
    )
    .unwrap();
}

/// An ISBN found in text, with byte positions of the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIsbn {
    /// The digits as written in the text.
    pub value: String,
    /// Canonical ISBN-13 rendering.
    pub canonical: String,
    pub start_index: u32,
    pub end_index: u32,
}

/// Extract every structurally valid ISBN from `text`, canonicalized to
/// ISBN-13.
pub fn extract_isbns(text: &str) -> Vec<String> {
    extract_isbns_with_positions(text)
        .into_iter()
        .map(|found| found.canonical)
        .collect()
}

/// Extract every structurally valid ISBN from `text`, with the byte range
/// of each match.
pub fn extract_isbns_with_positions(text: &str) -> Vec<ExtractedIsbn> {
    ISBN_REGEX
        .captures_iter(text)
        .filter_map(|cap| {
            let m = cap.name("isbn")?;
            let isbn = parse(m.as_str()).ok()?;
            Some(ExtractedIsbn {
                value: m.as_str().to_string(),
                canonical: isbn.to_isbn13(),
                start_index: m.start() as u32,
                end_index: m.end() as u32,
            })
        })
        .collect()
}
