//! Circulars and ministerial instructions.

use crate::rules::normalize::Normalizer;
use crate::rules::patterns::{OPTIONAL_NUMBER, date};
use crate::{Category, RuleSpec};

/// circulaire ministérielle [n° ...] du <date>
pub fn rule_circulaire_ministerielle() -> RuleSpec {
    rule! {
        category: Category::Circulaire,
        pattern: format!(r"\bcirculaire\s+(?:ministérielle|ministerielle)\s+{OPTIONAL_NUMBER}du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// circulaire [n° ...] du <date>
pub fn rule_circulaire_dated() -> RuleSpec {
    rule! {
        category: Category::Circulaire,
        pattern: format!(r"\bcirculaire\s+{OPTIONAL_NUMBER}du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// instruction ministérielle [n° ...] du <date>
pub fn rule_instruction_ministerielle() -> RuleSpec {
    rule! {
        category: Category::Circulaire,
        pattern: format!(r"\binstruction\s+(?:ministérielle|ministerielle)\s+{OPTIONAL_NUMBER}du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// instruction du Ministère de <name> du <date>
pub fn rule_instruction_du_ministere() -> RuleSpec {
    rule! {
        category: Category::Circulaire,
        pattern: format!(r"\binstruction\s+du\s+[Mm]inistère\s+de\s+[\w\s'’]+?\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

pub fn get() -> Vec<RuleSpec> {
    vec![
        rule_circulaire_ministerielle(),
        rule_circulaire_dated(),
        rule_instruction_ministerielle(),
        rule_instruction_du_ministere(),
    ]
}
