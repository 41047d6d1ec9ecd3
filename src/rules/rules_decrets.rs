//! Decrees.

use crate::rules::normalize::Normalizer;
use crate::rules::patterns::date;
use crate::{Category, RuleSpec};

/// décret n° 77-1133 du 21 septembre 1977
pub fn rule_decret_numbered() -> RuleSpec {
    rule! {
        category: Category::Decret,
        pattern: format!(r"\b(?:décret|decret)\s+n[°ºo]\s*\d{{2,4}}[-–\s]\d+\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// décret du 21 septembre 1977
pub fn rule_decret_dated() -> RuleSpec {
    rule! {
        category: Category::Decret,
        pattern: format!(r"\b(?:décret|decret)\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// article 3 du décret n° 77-1133
pub fn rule_article_du_decret() -> RuleSpec {
    rule! {
        category: Category::Decret,
        pattern: r"\barticle[s]?\s+\d+\s+du\s+(?:décret|decret)\s+n[°ºo]\s*\d+[-–\s]\d+",
        normalize: Normalizer::Lowercase,
    }
}

pub fn get() -> Vec<RuleSpec> {
    vec![rule_decret_numbered(), rule_decret_dated(), rule_article_du_decret()]
}
