//! European directives.

use crate::rules::normalize::Normalizer;
use crate::rules::patterns::date;
use crate::{Category, RuleSpec};

/// directive 2010/75/UE [du <date>]
pub fn rule_directive_numbered() -> RuleSpec {
    rule! {
        category: Category::Directive,
        pattern: format!(r"\bdirective\s+\d{{4}}/\d{{1,4}}/(?:UE|CE|CEEA)(?:\s+du\s+{})?", date()),
        normalize: Normalizer::Uppercase,
    }
}

/// directive européenne n° 2012/18
pub fn rule_directive_europeenne() -> RuleSpec {
    rule! {
        category: Category::Directive,
        pattern: r"\bdirective\s+européenne\s+n[°ºo]?\s*\d{4}/\d+",
        normalize: Normalizer::Lowercase,
    }
}

pub fn get() -> Vec<RuleSpec> {
    vec![rule_directive_numbered(), rule_directive_europeenne()]
}
