//! Orders: ministerial, prefectoral and the generic fallback.
//!
//! The generic rules come last in the table and carry a `not_followed_by`
//! guard so that an order qualified right after its date or keyword is left
//! to the specific rules.

use crate::rules::normalize::Normalizer;
use crate::rules::patterns::{ARRETE, OPTIONAL_NUMBER, date};
use crate::{Category, RuleSpec};

/// arrêté ministériel [n° ...] du <date>
pub fn rule_arrete_ministeriel() -> RuleSpec {
    rule! {
        category: Category::ArreteMinisteriel,
        pattern: format!(r"\b{ARRETE}\s+(?:ministériel|ministeriel)\s+{OPTIONAL_NUMBER}du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// arrêté du Ministre de <portfolio> du <date>
pub fn rule_arrete_du_ministre() -> RuleSpec {
    rule! {
        category: Category::ArreteMinisteriel,
        pattern: format!(r"\b{ARRETE}\s+du\s+[Mm]inistre\s+(?:de\s+|d['’]|des\s+)[\w\s]+?\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// arrêté-type n° 253 [et 254 ...]
pub fn rule_arrete_type() -> RuleSpec {
    rule! {
        category: Category::ArreteMinisteriel,
        pattern: r"\b(?:arrêtés?|arretes?)[-\s]types?\s+n[°ºo]\s*\d+(?:\s+et\s+\d+)*",
        normalize: Normalizer::Lowercase,
    }
}

/// arrêté préfectoral n° <id> du <date>
pub fn rule_arrete_prefectoral_numbered() -> RuleSpec {
    rule! {
        category: Category::ArretePrefectoral,
        pattern: format!(r"\b{ARRETE}\s+(?:préfectoral|prefectoral)\s+n[°ºo]\s*[\d/IC\-A-Z]+\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// arrêté préfectoral du <date>
pub fn rule_arrete_prefectoral_dated() -> RuleSpec {
    rule! {
        category: Category::ArretePrefectoral,
        pattern: format!(r"\b{ARRETE}\s+(?:préfectoral|prefectoral)\s+du\s+{}", date()),
        normalize: Normalizer::Lowercase,
    }
}

/// [le] présent arrêté [préfectoral]
///
/// Whitespace after `arrêté` is required even when `préfectoral` is absent,
/// so the span then ends with that whitespace.
pub fn rule_present_arrete_prefectoral() -> RuleSpec {
    rule! {
        category: Category::ArretePrefectoral,
        pattern: format!(r"\b(?:le\s+)?présent\s+{ARRETE}\s+(?:préfectoral|prefectoral)?"),
        normalize: Normalizer::Lowercase,
    }
}

/// arrêté du <date>, unless `préfectoral` follows the date
pub fn rule_arrete_dated() -> RuleSpec {
    rule! {
        category: Category::Arrete,
        pattern: format!(r"\b{ARRETE}\s+du\s+{}", date()),
        not_followed_by: r"\s+(?:préfectoral|prefectoral)",
        normalize: Normalizer::Lowercase,
    }
}

/// [le] présent arrêté, unless qualified as ministerial or prefectoral
pub fn rule_present_arrete() -> RuleSpec {
    rule! {
        category: Category::Arrete,
        pattern: format!(r"\b(?:le\s+)?présent\s+{ARRETE}"),
        not_followed_by: r"\s+(?:ministériel|ministeriel|préfectoral|prefectoral)",
        normalize: Normalizer::Lowercase,
    }
}

pub fn ministerial() -> Vec<RuleSpec> {
    vec![rule_arrete_ministeriel(), rule_arrete_du_ministre(), rule_arrete_type()]
}

pub fn prefectoral() -> Vec<RuleSpec> {
    vec![rule_arrete_prefectoral_numbered(), rule_arrete_prefectoral_dated(), rule_present_arrete_prefectoral()]
}

pub fn generic() -> Vec<RuleSpec> {
    vec![rule_arrete_dated(), rule_present_arrete()]
}
