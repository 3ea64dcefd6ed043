//! Redaction rule configuration value types.

/// One literal-string substitution rule.
///
/// Rules match as exact substrings. When several originals match at the same
/// position the longest original wins, so a short rule never pre-empts a
/// longer one that contains it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionRule {
    pub original: String,
    pub replacement: String,
}

impl RedactionRule {
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }
}
