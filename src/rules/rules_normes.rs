//! Standards.

use crate::rules::normalize::Normalizer;
use crate::{Category, RuleSpec};

/// norme française NF 12-345
pub fn rule_norme_francaise() -> RuleSpec {
    rule! {
        category: Category::Norme,
        pattern: r"\bnorme\s+française\s+[A-Z]+\s*\d+(?:[-\s]\d+)*",
        normalize: Normalizer::Lowercase,
    }
}

/// norme NF|ISO|EN <designation>
///
/// The designation is greedy over words, spaces and hyphens, so it usually
/// runs to the next punctuation mark.
pub fn rule_norme_organisme() -> RuleSpec {
    rule! {
        category: Category::Norme,
        pattern: r"\bnorme\s+(?:NF|ISO|EN)\s+[\w\s-]+",
        normalize: Normalizer::Lowercase,
    }
}

pub fn get() -> Vec<RuleSpec> {
    vec![rule_norme_francaise(), rule_norme_organisme()]
}
