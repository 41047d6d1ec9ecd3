use crate::engine::{Annotator, Registry, RegistryBuilder, RunResult};
use crate::{Category, Reference};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(|| {
    RegistryBuilder::builtin().build().unwrap_or_else(|err| panic!("built-in rule table is invalid: {err}"))
});

/// The built-in French rule registry, compiled on first use.
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// What to do with a candidate whose span has unbalanced `<`/`>` counts, i.e.
/// crosses a tag boundary of the surrounding markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkupPolicy {
    /// Keep it, count it in the run details and log a warning.
    #[default]
    Flag,
    /// Drop it before overlap resolution.
    Reject,
}

/// Options that affect annotation behavior.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub markup_policy: MarkupPolicy,
}

/// Result of [`annotate`] and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// The input with every reference wrapped in an anchor.
    pub html: String,
    /// Accepted references, sorted by start offset, non-overlapping.
    pub references: Vec<Reference>,
}

impl Annotation {
    pub fn into_parts(self) -> (String, Vec<Reference>) {
        (self.html, self.references)
    }
}

/// Per-rule line of [`AnnotationDetails`].
#[derive(Debug, Clone)]
pub struct RuleSummary {
    /// Position of the rule in its registry.
    pub index: usize,
    pub category: Category,
    pub pattern: String,
    /// Raw candidates before overlap resolution.
    pub matches: usize,
}

/// Extra details returned by [`annotate_verbose_with`].
///
/// Meant for debugging rule tables and for profiling; the plain entry points
/// don't build it.
#[derive(Debug, Clone)]
pub struct AnnotationDetails {
    pub total: Duration,
    pub scan: Duration,
    pub resolve: Duration,
    pub render: Duration,
    pub raw_matches: usize,
    pub discarded: usize,
    pub normalize_fallbacks: usize,
    pub markup_flagged: usize,
    pub markup_rejected: usize,
    /// Rules that produced at least one raw candidate, in registry order.
    pub rules: Vec<RuleSummary>,
}

/// Result of [`annotate_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnnotationVerbose {
    pub annotation: Annotation,
    pub details: AnnotationDetails,
}

/// Annotate `text` with the built-in rules and default [`Options`].
///
/// Offsets in the returned references are byte offsets into `text`. Running
/// this again on its own output is not supported: anchor attributes and
/// escaped content would be matched again.
///
/// # Example
/// ```
/// use juriref::{Category, annotate};
///
/// let out = annotate("Vu la loi du 12 janvier 2010.");
/// assert_eq!(out.references.len(), 1);
/// assert_eq!(out.references[0].category, Category::Loi);
/// assert!(out.html.contains(r##"<a href="#ref:loi:loi-du-12-janvier-2010""##));
/// ```
pub fn annotate(text: &str) -> Annotation {
    annotate_with(text, &Options::default())
}

/// Annotate `text` with the built-in rules and the provided `options`.
pub fn annotate_with(text: &str, options: &Options) -> Annotation {
    annotate_with_registry(text, default_registry(), options)
}

/// Annotate `text` against a custom `registry`.
pub fn annotate_with_registry(text: &str, registry: &Registry, options: &Options) -> Annotation {
    let (html, references) = Annotator::new(registry).run(text, options);
    Annotation { html, references }
}

/// Annotate `text` against `registry` and return run details as well.
pub fn annotate_verbose_with(text: &str, registry: &Registry, options: &Options) -> AnnotationVerbose {
    let RunResult { html, references, metrics } = Annotator::new(registry).run_with_metrics(text, options);

    let rules = registry
        .rules()
        .iter()
        .zip(&metrics.scan.per_rule)
        .enumerate()
        .filter(|(_, (_, count))| **count > 0)
        .map(|(index, (rule, count))| RuleSummary {
            index,
            category: rule.category,
            pattern: rule.matcher.pattern().to_string(),
            matches: *count,
        })
        .collect();

    let details = AnnotationDetails {
        total: metrics.total,
        scan: metrics.scan.duration,
        resolve: metrics.resolve,
        render: metrics.render,
        raw_matches: metrics.scan.raw_matches,
        discarded: metrics.discarded,
        normalize_fallbacks: metrics.scan.normalize_fallbacks,
        markup_flagged: metrics.markup_flagged,
        markup_rejected: metrics.markup_rejected,
        rules,
    };

    AnnotationVerbose { annotation: Annotation { html, references }, details }
}

/// Category tags the built-in rules can produce.
pub fn list_categories() -> BTreeSet<&'static str> {
    default_registry().categories().categories().map(Category::as_str).collect()
}
