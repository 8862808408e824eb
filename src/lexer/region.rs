//! Delimited-region scanning.
//!
//! One mechanism serves both comment and string-literal extraction: find
//! the first configured pair whose opener matches at the position, then
//! accumulate the interior up to the closer. A missing closer is reported
//! rather than read past.

use crate::lexer::config::DelimiterPair;
use crate::utils::LexError;

/// The interior of a scanned region and the cursor just past its closer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub interior: String,
    pub end: usize,
}

/// Check whether `marker` matches the buffer verbatim at `at`.
///
/// Empty markers never match; a zero-length match could not advance the
/// cursor.
pub fn starts_with(src: &[char], at: usize, marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    let mut pos = at;
    for m in marker.chars() {
        if pos >= src.len() || src[pos] != m {
            return false;
        }
        pos += 1;
    }
    true
}

/// Find the first pair whose opener matches the buffer at `at`
pub fn find_opener<'a>(
    src: &[char],
    at: usize,
    pairs: &'a [DelimiterPair],
) -> Option<&'a DelimiterPair> {
    pairs.iter().find(|p| starts_with(src, at, &p.opener))
}

/// Scan the region opened by `pair` at `at`.
///
/// The caller must have matched `pair.opener` at `at`. On success the
/// returned cursor sits just past the closer; if the closer never occurs
/// before end of input this is an `UnterminatedRegion`.
pub fn scan_region(src: &[char], at: usize, pair: &DelimiterPair) -> Result<Region, LexError> {
    let start = at + pair.opener.chars().count();
    let mut pos = start;
    while pos < src.len() {
        if starts_with(src, pos, &pair.closer) {
            return Ok(Region {
                interior: src[start..pos].iter().collect(),
                end: pos + pair.closer.chars().count(),
            });
        }
        pos += 1;
    }
    Err(LexError::UnterminatedRegion {
        opener: pair.opener.clone(),
        closer: pair.closer.clone(),
        at,
    })
}
