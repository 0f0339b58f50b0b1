//! Query normalization and permissive match patterns
//!
//! User input is first normalized (trimmed and lower-cased), then compiled
//! into a regex that tolerates the spelling variation common in recipe text:
//! matching ignores letter case, treats apostrophes, spaces and hyphens as
//! interchangeable separators, and treats accented vowels as equal to their
//! bare forms. "pomme de terre" therefore matches "Pomme-de-terre", and
//! "creme" matches "Crème fraîche".

use regex::RegexBuilder;

use super::error::SearchError;

/// Class matching the separator characters treated as interchangeable
const SEPARATORS: &str = "(?:'| |-)";

/// Normalizes raw user input: trims surrounding whitespace and lower-cases
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A compiled, case- and accent-insensitive substring pattern
///
/// Built from already-normalized input. The input is regex-escaped before
/// the permissive character classes are substituted in, so pattern text can
/// never smuggle regex syntax into the match.
#[derive(Debug, Clone)]
pub struct MatchPattern {
    original: String,
    compiled: regex::Regex,
}

impl MatchPattern {
    /// Compiles a pattern from normalized input
    ///
    /// # Errors
    ///
    /// Returns `SearchError::PatternError` if the expanded pattern fails to
    /// compile. Escaping makes this unreachable for ordinary input; the
    /// error is still propagated rather than swallowed.
    pub fn new(input: &str) -> Result<Self, SearchError> {
        let expanded = expand_permissive_classes(&regex::escape(input));
        let compiled = RegexBuilder::new(&expanded)
            .case_insensitive(true)
            .build()
            .map_err(|e| SearchError::PatternError {
                input: input.to_string(),
                source: e,
            })?;
        Ok(Self {
            original: input.to_string(),
            compiled,
        })
    }

    /// Tests whether the pattern occurs anywhere in `text`
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }

    /// The normalized input this pattern was built from
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }
}

/// Rewrites an escaped literal into its permissive form
///
/// Separators (apostrophe, space, hyphen) each become a class matching any
/// of the three, and the vowels a/e become classes covering their accented
/// variants. Escape pairs produced by `regex::escape` are kept intact, with
/// one exception: an escaped hyphen is still a separator.
fn expand_permissive_classes(escaped: &str) -> String {
    let mut expanded = String::with_capacity(escaped.len() * 2);
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('-') => expanded.push_str(SEPARATORS),
                Some(next) => {
                    expanded.push('\\');
                    expanded.push(next);
                }
                None => expanded.push('\\'),
            },
            ' ' | '\'' => expanded.push_str(SEPARATORS),
            'a' | 'à' => expanded.push_str("[aà]"),
            'e' | 'é' | 'è' | 'ê' => expanded.push_str("[eéèê]"),
            _ => expanded.push(c),
        }
    }
    expanded
}
