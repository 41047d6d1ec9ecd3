//! Statutory codes and their articles.

use crate::rules::normalize::Normalizer;
use crate::{Category, RuleSpec};

/// code de l'environnement
pub fn rule_code_environnement() -> RuleSpec {
    rule! {
        category: Category::Code,
        pattern: r"\b[Cc]ode\s+de\s+l['’]?>?environnement\b",
        normalize: Normalizer::Fixed("code de l'environnement"),
    }
}

/// code du travail
pub fn rule_code_travail() -> RuleSpec {
    rule! {
        category: Category::Code,
        pattern: r"\b[Cc]ode\s+du\s+[Tt]ravail\b",
        normalize: Normalizer::Fixed("code du travail"),
    }
}

/// livre <roman> du code de l'environnement | du code du travail
pub fn rule_livre_du_code() -> RuleSpec {
    rule! {
        category: Category::Code,
        pattern: r"\b[Ll]ivre\s+[IVX]+\s+du\s+[Cc]ode\s+(?:de\s+l['’]?environnement|du\s+[Tt]ravail)",
        normalize: Normalizer::Lowercase,
    }
}

/// article L. 512-1, articles R 511-9, article D.1
pub fn rule_article_de_code() -> RuleSpec {
    rule! {
        category: Category::Code,
        pattern: r"\barticle[s]?\s+[LRD]\.?\s*\d+(?:[-\.]\d+)*",
        normalize: Normalizer::Lowercase,
    }
}

pub fn get() -> Vec<RuleSpec> {
    vec![rule_code_environnement(), rule_code_travail(), rule_livre_du_code(), rule_article_de_code()]
}
