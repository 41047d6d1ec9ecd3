//! Overlap resolution.
//!
//! The scanner produces candidates that may overlap freely. Resolution turns
//! them into a disjoint set with a single greedy sweep:
//!
//! ```text
//! stable sort by (start asc, length desc)     ties keep production order
//!        │
//!        ▼
//! sweep: accept if start >= last accepted end, else discard for good
//! ```
//!
//! At each position this keeps the longest candidate starting there, and on
//! equal length the one from the earlier rule. It does not look for the
//! maximum-coverage subset: a long candidate starting inside an already
//! accepted short one is dropped even when keeping it would cover more text.
//! Callers depend on that exact behavior, so keep it.
//!
//! ## Markup guard
//!
//! Patterns run over raw HTML. A span with unbalanced `<`/`>` counts crosses
//! a tag boundary, and wrapping it in an anchor would break the markup around
//! it. Depending on [`MarkupPolicy`] such candidates are either flagged after
//! acceptance or removed before the sweep, in which case they block nothing.

use crate::{MarkupPolicy, RawMatch};

/// Outcome of [`resolve_overlaps`].
#[derive(Debug, Default)]
pub(crate) struct Resolution {
    /// Accepted candidates, sorted by start, pairwise disjoint.
    pub accepted: Vec<RawMatch>,
    /// Candidates dropped because they overlapped an accepted one.
    pub discarded: usize,
    /// Candidates removed by [`MarkupPolicy::Reject`].
    pub markup_rejected: usize,
    /// Accepted candidates with unbalanced markup under [`MarkupPolicy::Flag`].
    pub markup_flagged: usize,
}

pub(crate) fn resolve_overlaps(mut matches: Vec<RawMatch>, policy: MarkupPolicy) -> Resolution {
    let mut markup_rejected = 0;
    if policy == MarkupPolicy::Reject {
        let before = matches.len();
        matches.retain(|m| !has_unbalanced_markup(&m.raw_text));
        markup_rejected = before - matches.len();
    }

    let (accepted, discarded) = select_disjoint(matches);

    let mut markup_flagged = 0;
    if policy == MarkupPolicy::Flag {
        for m in accepted.iter().filter(|m| has_unbalanced_markup(&m.raw_text)) {
            markup_flagged += 1;
            tracing::warn!(
                start = m.span.start,
                end = m.span.end,
                category = %m.category,
                rule = m.rule,
                "reference span crosses a markup boundary"
            );
        }
    }

    Resolution { accepted, discarded, markup_rejected, markup_flagged }
}

/// The greedy sweep itself. Returns the accepted candidates and the number
/// discarded.
pub(crate) fn select_disjoint(mut matches: Vec<RawMatch>) -> (Vec<RawMatch>, usize) {
    // `sort_by` is stable: equal keys keep production order, i.e. rule priority.
    matches.sort_by(|a, b| a.span.start.cmp(&b.span.start).then(b.span.len().cmp(&a.span.len())));

    let total = matches.len();
    let mut accepted: Vec<RawMatch> = Vec::new();
    let mut last_end = 0;

    for m in matches {
        if m.span.start >= last_end {
            last_end = m.span.end;
            accepted.push(m);
        }
    }

    let discarded = total - accepted.len();
    (accepted, discarded)
}

/// True when `s` holds a different number of `<` and `>`.
pub(crate) fn has_unbalanced_markup(s: &str) -> bool {
    let opening = s.bytes().filter(|&b| b == b'<').count();
    let closing = s.bytes().filter(|&b| b == b'>').count();
    opening != closing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Span};

    fn candidate(start: usize, end: usize, category: Category, rule: usize) -> RawMatch {
        RawMatch {
            span: Span { start, end },
            category,
            rule,
            raw_text: "x".repeat(end - start),
            normalized_text: "x".repeat(end - start),
        }
    }

    fn summary(accepted: &[RawMatch]) -> Vec<(usize, usize, Category)> {
        accepted.iter().map(|m| (m.span.start, m.span.end, m.category)).collect()
    }

    #[test]
    fn longest_candidate_at_a_position_wins() {
        let (accepted, discarded) = select_disjoint(vec![
            candidate(0, 4, Category::Loi, 0),
            candidate(0, 10, Category::Decret, 1),
            candidate(2, 6, Category::Norme, 2),
        ]);
        assert_eq!(summary(&accepted), vec![(0, 10, Category::Decret)]);
        assert_eq!(discarded, 2);
    }

    #[test]
    fn equal_spans_keep_the_earlier_rule() {
        let (accepted, _) = select_disjoint(vec![
            candidate(3, 8, Category::ArretePrefectoral, 5),
            candidate(3, 8, Category::Arrete, 9),
        ]);
        assert_eq!(summary(&accepted), vec![(3, 8, Category::ArretePrefectoral)]);

        // Production order decides, not the rule index.
        let (accepted, _) =
            select_disjoint(vec![candidate(3, 8, Category::Arrete, 9), candidate(3, 8, Category::ArretePrefectoral, 5)]);
        assert_eq!(summary(&accepted), vec![(3, 8, Category::Arrete)]);
    }

    #[test]
    fn short_early_match_blocks_a_longer_later_one() {
        // B would cover 1..20 on its own; the sweep keeps A and drops B.
        let (accepted, discarded) =
            select_disjoint(vec![candidate(1, 20, Category::Loi, 1), candidate(0, 3, Category::Code, 0)]);
        assert_eq!(summary(&accepted), vec![(0, 3, Category::Code)]);
        assert_eq!(discarded, 1);
    }

    #[test]
    fn touching_spans_are_both_kept() {
        let (accepted, discarded) = select_disjoint(vec![
            candidate(5, 9, Category::Norme, 1),
            candidate(0, 5, Category::Code, 0),
            candidate(9, 12, Category::Loi, 2),
        ]);
        assert_eq!(summary(&accepted), vec![(0, 5, Category::Code), (5, 9, Category::Norme), (9, 12, Category::Loi)]);
        assert_eq!(discarded, 0);
    }

    #[test]
    fn accepted_set_is_sorted_and_disjoint() {
        let mut input = Vec::new();
        for i in 0..40usize {
            let start = (i * 7) % 31;
            let end = start + 1 + (i * 3) % 9;
            input.push(candidate(start, end, Category::ALL[i % Category::ALL.len()], i));
        }
        let (accepted, discarded) = select_disjoint(input);
        assert_eq!(accepted.len() + discarded, 40);
        for pair in accepted.windows(2) {
            assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn empty_input_yields_nothing() {
        let (accepted, discarded) = select_disjoint(Vec::new());
        assert!(accepted.is_empty());
        assert_eq!(discarded, 0);
    }

    #[test]
    fn markup_balance_counts_angle_brackets() {
        assert!(!has_unbalanced_markup("loi du <b>12</b> mai 2001"));
        assert!(has_unbalanced_markup("code de l'>environnement"));
        assert!(!has_unbalanced_markup("décret"));
    }

    #[test]
    fn reject_policy_removes_candidates_before_the_sweep() {
        let mut crossing = candidate(0, 10, Category::Code, 0);
        crossing.raw_text = "code</p><".to_string();
        let inner = candidate(2, 6, Category::Loi, 1);

        let flagged = resolve_overlaps(vec![crossing.clone(), inner.clone()], MarkupPolicy::Flag);
        assert_eq!(summary(&flagged.accepted), vec![(0, 10, Category::Code)]);
        assert_eq!(flagged.markup_flagged, 1);
        assert_eq!(flagged.discarded, 1);

        let rejected = resolve_overlaps(vec![crossing, inner], MarkupPolicy::Reject);
        assert_eq!(summary(&rejected.accepted), vec![(2, 6, Category::Loi)]);
        assert_eq!(rejected.markup_rejected, 1);
        assert_eq!(rejected.discarded, 0);
    }
}
