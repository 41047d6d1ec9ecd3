//! Pattern registry.
//!
//! This module holds the *static* side of the engine: the ordered list of
//! compiled rules every annotation call runs against.
//!
//! Annotation is split into two phases:
//!
//! 1. **Build the registry** (this module): compile a rule table
//!    (`RuleSpec`s) into a `Registry`. Every pattern is validated here, so a
//!    malformed table fails once, up front, instead of on some later input.
//! 2. **Run** (see `scanner.rs`, `resolve.rs`, `render.rs`): scan one input
//!    against the frozen registry.
//!
//! ## Matching model
//!
//! Each rule is a regex compiled case-insensitively, with two optional extras
//! standing in for lookaround:
//!
//! - `not_followed_by`: a pattern tried anchored at the end of a match. If it
//!   matches, the match is dropped and the search resumes one character after
//!   the dropped match's start.
//! - a capture group named `span`: when the rule's pattern has one, the
//!   reference is that group only. Text matched after it is required context,
//!   and the next search starts at the group's end.
//!
//! ## Invariants
//!
//! - Rule order is the declaration order of the table and never changes.
//! - A `Registry` is immutable once built; it is `Send + Sync` and can be
//!   shared by any number of concurrent annotation calls.

use crate::error::RegistryError;
use crate::rules::normalize::Normalizer;
use crate::{Category, CategorySet, Span};
use regex::{Regex, RegexBuilder};

/// Declarative form of one rule, as written in a rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub category: Category,
    /// Pattern source, compiled case-insensitively.
    pub pattern: String,
    /// Trailing context that disqualifies a match.
    pub not_followed_by: Option<String>,
    pub normalizer: Normalizer,
}

/// A compiled rule.
#[derive(Debug)]
pub(crate) struct Rule {
    pub category: Category,
    pub matcher: Matcher,
    pub normalizer: Normalizer,
}

#[derive(Debug)]
pub(crate) struct Matcher {
    regex: Regex,
    reject: Option<Regex>,
    span_group: Option<usize>,
}

impl Matcher {
    fn compile(index: usize, spec: &RuleSpec) -> Result<Self, RegistryError> {
        let regex = RegexBuilder::new(&spec.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| RegistryError::InvalidPattern { index, category: spec.category, source })?;

        let reject = spec
            .not_followed_by
            .as_deref()
            .map(|src| RegexBuilder::new(&format!("^(?:{src})")).case_insensitive(true).build())
            .transpose()
            .map_err(|source| RegistryError::InvalidLookahead { index, category: spec.category, source })?;

        let span_group = regex.capture_names().position(|name| name == Some("span"));

        Ok(Matcher { regex, reject, span_group })
    }

    pub(crate) fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Every match of this rule in `text`, left to right.
    ///
    /// ```text
    /// text:   "arrêté du 1er mai 2001 préfectoral, arrêté du 2 mai 2001."
    ///          └─ rejected (not_followed_by) ─┘     └──── accepted ────┘
    /// ```
    pub(crate) fn find_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut locs = self.regex.capture_locations();
        let mut at = 0;

        while at <= text.len() {
            let Some(m) = self.regex.captures_read_at(&mut locs, text, at) else {
                break;
            };
            let (start, end) = self.span_group.and_then(|group| locs.get(group)).unwrap_or((m.start(), m.end()));

            if self.reject.as_ref().is_some_and(|reject| reject.is_match(&text[end..])) {
                at = next_char_boundary(text, m.start());
                continue;
            }

            spans.push(Span { start, end });
            at = if end > m.start() { end } else { next_char_boundary(text, m.start()) };
        }

        spans
    }
}

/// Byte offset just past the character starting at `pos`, or past the end of
/// `text` when `pos` is the end.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Ordered, immutable collection of compiled rules.
#[derive(Debug)]
pub struct Registry {
    rules: Vec<Rule>,
    categories: CategorySet,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Compile `specs`, in order.
    pub fn from_specs(specs: impl IntoIterator<Item = RuleSpec>) -> Result<Self, RegistryError> {
        let rules = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let matcher = Matcher::compile(index, &spec)?;
                Ok(Rule { category: spec.category, matcher, normalizer: spec.normalizer })
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        if rules.is_empty() {
            return Err(RegistryError::Empty);
        }

        let categories = rules.iter().map(|r| r.category).collect();
        Ok(Registry { rules, categories })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Distinct categories this registry can produce.
    pub fn categories(&self) -> CategorySet {
        self.categories
    }

    pub(crate) fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Collects rule specs, then validates and freezes them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    specs: Vec<RuleSpec>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the built-in French rule table.
    pub fn builtin() -> Self {
        RegistryBuilder { specs: crate::rules::get() }
    }

    /// Append one rule after the ones already declared.
    pub fn rule(mut self, spec: RuleSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn rules(mut self, specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    pub fn build(self) -> Result<Registry, RegistryError> {
        Registry::from_specs(self.specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(pattern: &str) -> RuleSpec {
        RuleSpec {
            category: Category::Loi,
            pattern: pattern.to_string(),
            not_followed_by: None,
            normalizer: Normalizer::Lowercase,
        }
    }

    fn spans(rule: RuleSpec, text: &str) -> Vec<(usize, usize)> {
        let registry = Registry::from_specs([rule]).unwrap();
        registry.rules()[0].matcher.find_spans(text).into_iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn builtin_table_compiles() {
        let registry = RegistryBuilder::builtin().build().unwrap();
        assert_eq!(registry.len(), crate::rules::get().len());
        assert_eq!(registry.categories(), CategorySet::all());
    }

    #[test]
    fn malformed_pattern_is_reported_with_its_position() {
        let err = Registry::builder().rule(spec(r"loi")).rule(spec(r"loi (du")).build().unwrap_err();
        match err {
            RegistryError::InvalidPattern { index, category, .. } => {
                assert_eq!(index, 1);
                assert_eq!(category, Category::Loi);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_lookahead_is_reported() {
        let bad = RuleSpec { not_followed_by: Some("[".to_string()), ..spec("loi") };
        assert!(matches!(Registry::from_specs([bad]), Err(RegistryError::InvalidLookahead { index: 0, .. })));
    }

    #[test]
    fn empty_registry_is_rejected() {
        assert!(matches!(Registry::builder().build(), Err(RegistryError::Empty)));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(spans(spec(r"\bloi\b"), "LOI, Loi, loi"), vec![(0, 3), (5, 8), (10, 13)]);
    }

    #[test]
    fn rejected_match_retries_at_next_character() {
        let rule = RuleSpec { not_followed_by: Some(r"\s+bis".to_string()), ..spec(r"a+") };
        // "aaa bis" is rejected at 0, then "aa" at 1 and "a" at 2 are rejected too.
        assert_eq!(spans(rule, "aaa bis aa"), vec![(8, 10)]);
    }

    #[test]
    fn span_group_excludes_trailing_context() {
        let rule = spec(r"(?P<span>loi\s+\w+)[,.]");
        assert_eq!(spans(rule, "loi alpha, loi beta."), vec![(0, 9), (11, 19)]);
    }

    #[test]
    fn spans_are_byte_offsets() {
        let text = "Vu l'arrêté, arrêté";
        assert_eq!(spans(spec("arrêté"), text), vec![(5, 13), (15, 23)]);
    }
}
