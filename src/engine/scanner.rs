//! Multi-pattern scanning.
//!
//! Every rule of the registry runs independently over the whole input. The
//! output keeps production order (rule declaration order, then left to right
//! within a rule), which the overlap resolver relies on for tie-breaks.

use super::metrics::ScanMetrics;
use super::registry::Registry;
use crate::RawMatch;
use std::time::Instant;

/// Collect the raw, possibly overlapping matches of every rule.
///
/// A normalizer failure only affects its own match, which then carries its
/// raw text as normalized text.
pub(crate) fn scan(registry: &Registry, text: &str) -> (Vec<RawMatch>, ScanMetrics) {
    let started = Instant::now();
    let mut matches = Vec::new();
    let mut per_rule = Vec::with_capacity(registry.len());
    let mut fallbacks = 0;

    for (index, rule) in registry.rules().iter().enumerate() {
        let spans = rule.matcher.find_spans(text);
        per_rule.push(spans.len());

        for span in spans {
            let raw_text = &text[span.start..span.end];
            let normalized_text = match rule.normalizer.apply(raw_text) {
                Ok(normalized) => normalized,
                Err(_) => {
                    fallbacks += 1;
                    raw_text.to_string()
                }
            };
            matches.push(RawMatch {
                span,
                category: rule.category,
                rule: index,
                raw_text: raw_text.to_string(),
                normalized_text,
            });
        }
    }

    let metrics =
        ScanMetrics { duration: started.elapsed(), raw_matches: matches.len(), per_rule, normalize_fallbacks: fallbacks };
    (matches, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::normalize::Normalizer;
    use crate::{Category, RuleSpec};

    fn spec(category: Category, pattern: &str, normalizer: Normalizer) -> RuleSpec {
        RuleSpec { category, pattern: pattern.to_string(), not_followed_by: None, normalizer }
    }

    #[test]
    fn matches_come_in_rule_order_then_position_order() {
        let registry = Registry::from_specs([
            spec(Category::Norme, r"\bb\b", Normalizer::Lowercase),
            spec(Category::Code, r"\ba\b", Normalizer::Lowercase),
        ])
        .unwrap();

        let (matches, metrics) = scan(&registry, "a b a b");
        let order: Vec<(usize, Category)> = matches.iter().map(|m| (m.span.start, m.category)).collect();
        assert_eq!(order, vec![(2, Category::Norme), (6, Category::Norme), (0, Category::Code), (4, Category::Code)]);
        assert_eq!(metrics.per_rule, vec![2, 2]);
        assert_eq!(metrics.raw_matches, 4);
    }

    #[test]
    fn rules_may_overlap_each_other() {
        let registry = Registry::from_specs([
            spec(Category::Loi, r"loi du \d+", Normalizer::Lowercase),
            spec(Category::Decret, r"du \d+", Normalizer::Lowercase),
        ])
        .unwrap();

        let (matches, _) = scan(&registry, "loi du 12");
        assert_eq!(matches.len(), 2);
        assert!(matches[0].span.overlaps(&matches[1].span));
    }

    #[test]
    fn normalizer_failure_falls_back_to_raw_text() {
        let registry = Registry::from_specs([
            spec(Category::Norme, r"\s{2,}", Normalizer::Lowercase),
            spec(Category::Loi, r"LOI", Normalizer::Lowercase),
        ])
        .unwrap();

        let (matches, metrics) = scan(&registry, "LOI   LOI");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].normalized_text, "   ");
        assert_eq!(matches[1].normalized_text, "loi");
        assert_eq!(matches[2].normalized_text, "loi");
        assert_eq!(metrics.normalize_fallbacks, 1);
    }
}
