//! Domestic laws.

use crate::rules::normalize::Normalizer;
use crate::rules::patterns::date;
use crate::{Category, RuleSpec};

/// loi n° 76-663 du 19 juillet 1976
pub fn rule_loi_numbered() -> RuleSpec {
    rule! {
        category: Category::Loi,
        pattern: format!(r"\bloi\s+n[°ºo]\s*\d{{2,4}}[-–]\d+\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// loi du 12 janvier 2010
pub fn rule_loi_dated() -> RuleSpec {
    rule! {
        category: Category::Loi,
        pattern: format!(r"\bloi\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// [la] loi sur les <subject> | loi sur l'<subject>
///
/// The subject runs lazily up to `lui sont`, `sont applicables` or the first
/// `,`/`;`/`.`; the terminator is required but stays outside the span.
pub fn rule_loi_sur() -> RuleSpec {
    rule! {
        category: Category::Loi,
        pattern: r"\b(?P<span>(?:la\s+)?loi\s+sur\s+(?:les\s+|l['’])[\w\s,'-]+?)(?:\s+lui\s+sont|\s+sont\s+applicables|[,;.])",
        normalize: Normalizer::Lowercase,
    }
}

pub fn get() -> Vec<RuleSpec> {
    vec![rule_loi_numbered(), rule_loi_dated(), rule_loi_sur()]
}
