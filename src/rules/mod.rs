//! Built-in rule table for French legal references.
//!
//! Rules are grouped by instrument family, one file per family. [`get`]
//! concatenates them in evaluation order, which is also the tie-break order
//! when two rules match the same span: earlier rules win.

pub mod normalize;
pub mod patterns;
pub mod rules_arretes;
pub mod rules_circulaires;
pub mod rules_codes;
pub mod rules_decrets;
pub mod rules_directives;
pub mod rules_lois;
pub mod rules_normes;


use crate::RuleSpec;

/// The built-in rule table, in evaluation order.
///
/// Ministerial and prefectoral orders precede the generic `arrete` rules.
pub fn get() -> Vec<RuleSpec> {
    let mut rules = Vec::new();
    rules.extend(rules_codes::get());
    rules.extend(rules_directives::get());
    rules.extend(rules_lois::get());
    rules.extend(rules_arretes::ministerial());
    rules.extend(rules_decrets::get());
    rules.extend(rules_circulaires::get());
    rules.extend(rules_arretes::prefectoral());
    rules.extend(rules_normes::get());
    rules.extend(rules_arretes::generic());
    rules
}
