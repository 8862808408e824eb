//! Scan-unit classification and keyword matching policy.
//!
//! The classifiers operate on a fixed 7-bit range: ASCII letters, ASCII
//! digits, and space/tab/newline. Anything outside that range falls through
//! to the engine's error rule.

/// Check if the unit is an ASCII letter
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if the unit is an ASCII digit
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Check if the unit is a space, tab, or newline
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Equality policy used for keyword comparison.
///
/// Constructed once per analyzer from the `case_sensitive` configuration
/// flag. Symbol comparison is always verbatim and never goes through this.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    case_sensitive: bool,
}

impl Matcher {
    pub fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    /// Compare two text values under the configured case policy
    pub fn matches(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.eq_ignore_ascii_case(b)
        }
    }
}
