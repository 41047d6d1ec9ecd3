//! Annotation run metrics.
//!
//! Collected on every run; they are cheap (a few counters and timestamps).
//! `Annotator::run` drops them, `Annotator::run_with_metrics` hands them back
//! for profiling and rule debugging.

use crate::Reference;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Annotator::run_with_metrics`](super::Annotator::run_with_metrics).
    pub total: Duration,
    pub scan: ScanMetrics,
    /// Time spent in overlap resolution.
    pub resolve: Duration,
    /// Time spent rebuilding the annotated text.
    pub render: Duration,
    /// Candidates dropped by the greedy sweep.
    pub discarded: usize,
    /// Accepted references whose span has unbalanced `<`/`>`.
    pub markup_flagged: usize,
    /// Candidates removed before resolution for unbalanced `<`/`>`.
    pub markup_rejected: usize,
}

/// Counters for the scanning phase.
#[derive(Debug, Default, Clone)]
pub struct ScanMetrics {
    pub duration: Duration,
    /// Raw candidates across all rules.
    pub raw_matches: usize,
    /// Raw candidates per rule, indexed like the registry.
    pub per_rule: Vec<usize>,
    /// Matches whose normalizer failed and kept their raw text.
    pub normalize_fallbacks: usize,
}

/// Annotator output bundled with its metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub html: String,
    pub references: Vec<Reference>,
    pub metrics: RunMetrics,
}
