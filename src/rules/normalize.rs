//! Canonical forms for matched references.
//!
//! Every rule carries one [`Normalizer`]. The set of variants is closed so a
//! rule table stays plain data: no closures, nothing to capture, and each
//! variant can be tested on its own.

use crate::error::NormalizeError;

/// Pure text transform applied to the raw matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Collapse whitespace runs to one space, then lowercase.
    Lowercase,
    /// Collapse whitespace runs to one space, then uppercase.
    Uppercase,
    /// Ignore the raw text and always return this label.
    Fixed(&'static str),
}

impl Normalizer {
    /// Normalize `raw`.
    ///
    /// Fails when the canonical form would be blank; the scanner then keeps
    /// the raw text instead.
    pub fn apply(&self, raw: &str) -> Result<String, NormalizeError> {
        let normalized = match self {
            Normalizer::Lowercase => collapse_whitespace(&raw.to_lowercase()),
            Normalizer::Uppercase => collapse_whitespace(&raw.to_uppercase()),
            Normalizer::Fixed(label) => (*label).to_string(),
        };

        if normalized.trim().is_empty() { Err(NormalizeError::Blank) } else { Ok(normalized) }
    }
}

/// Replace every run of Unicode whitespace with a single ASCII space.
///
/// Leading and trailing runs are collapsed, not trimmed.
pub fn collapse_whitespace(s: &str) -> String {
    regex!(r"\s+").replace_all(s, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_collapses_whitespace_runs() {
        let out = Normalizer::Lowercase.apply("Décret  n°\n77-1133 du\t21 Septembre 1977").unwrap();
        assert_eq!(out, "décret n° 77-1133 du 21 septembre 1977");
    }

    #[test]
    fn lowercase_handles_non_breaking_spaces() {
        let out = Normalizer::Lowercase.apply("Loi\u{a0}du 12 janvier 2010").unwrap();
        assert_eq!(out, "loi du 12 janvier 2010");
    }

    #[test]
    fn uppercase_keeps_structure() {
        let out = Normalizer::Uppercase.apply("directive 2010/75/ue  du 24 novembre 2010").unwrap();
        assert_eq!(out, "DIRECTIVE 2010/75/UE DU 24 NOVEMBRE 2010");
    }

    #[test]
    fn fixed_ignores_raw_text() {
        let out = Normalizer::Fixed("code du travail").apply("Code du   Travail").unwrap();
        assert_eq!(out, "code du travail");
    }

    #[test]
    fn blank_output_is_an_error() {
        assert_eq!(Normalizer::Lowercase.apply(" \n\t"), Err(NormalizeError::Blank));
        assert_eq!(Normalizer::Fixed("").apply("anything"), Err(NormalizeError::Blank));
    }

    #[test]
    fn collapse_does_not_trim() {
        assert_eq!(collapse_whitespace("  a \n b  "), " a b ");
    }
}
