//! Literal-string redaction over finished fragments.

use aho_corasick::{AhoCorasick, MatchKind};
use thiserror::Error;

use revtex_model::RedactionRule;

/// The configured rule set could not be compiled into a matcher.
#[derive(Debug, Error)]
#[error("failed to build redaction matcher: {0}")]
pub struct RedactionBuildError(#[from] aho_corasick::BuildError);

/// Applies configured literal substitutions to generated text.
///
/// Built once from the loaded rules and read-only thereafter; with no rules
/// it is the identity transform. Matching is leftmost-longest: in one
/// left-to-right non-overlapping pass, the longest original wins at each
/// position, so a rule that is a substring of another never pre-empts the
/// longer match.
#[derive(Debug, Default)]
pub struct RedactionEngine {
    inner: Option<Matcher>,
}

#[derive(Debug)]
struct Matcher {
    automaton: AhoCorasick,
    replacements: Vec<String>,
}

impl RedactionEngine {
    /// Builds the engine from loaded rules. For duplicate originals the last
    /// rule wins.
    pub fn new(rules: &[RedactionRule]) -> Result<Self, RedactionBuildError> {
        let mut originals: Vec<&str> = Vec::new();
        let mut replacements: Vec<String> = Vec::new();
        for rule in rules {
            if let Some(index) = originals.iter().position(|original| *original == rule.original) {
                replacements[index] = rule.replacement.clone();
            } else {
                originals.push(&rule.original);
                replacements.push(rule.replacement.clone());
            }
        }
        if originals.is_empty() {
            return Ok(Self { inner: None });
        }
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&originals)?;
        Ok(Self {
            inner: Some(Matcher {
                automaton,
                replacements,
            }),
        })
    }

    /// True when at least one rule is loaded.
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    /// Rewrites `text`, replacing every match.
    pub fn apply(&self, text: &str) -> String {
        match &self.inner {
            Some(matcher) => matcher.automaton.replace_all(text, &matcher.replacements),
            None => text.to_string(),
        }
    }
}
