//! The annotation pipeline.
//!
//! ```text
//! scan (every rule, whole input) -> resolve_overlaps -> render
//! ```
//!
//! An `Annotator` only borrows its registry; all working data of a run is
//! local to that run, so one registry can serve concurrent calls.

use super::metrics::{RunMetrics, RunResult};
use super::registry::Registry;
use super::render::render;
use super::resolve::resolve_overlaps;
use super::scanner::scan;
use crate::{Options, Reference};
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct Annotator<'a> {
    registry: &'a Registry,
}

impl<'a> Annotator<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Annotator { registry }
    }

    /// Annotate `text` and return timing and counter details with the result.
    pub fn run_with_metrics(&self, text: &str, options: &Options) -> RunResult {
        let total_start = Instant::now();

        let (candidates, scan_metrics) = scan(self.registry, text);

        let resolve_start = Instant::now();
        let resolution = resolve_overlaps(candidates, options.markup_policy);
        let resolve = resolve_start.elapsed();

        let render_start = Instant::now();
        let (html, references) = render(text, resolution.accepted);
        let render = render_start.elapsed();

        tracing::debug!(
            input_len = text.len(),
            raw = scan_metrics.raw_matches,
            accepted = references.len(),
            discarded = resolution.discarded,
            "annotated input"
        );

        let metrics = RunMetrics {
            total: total_start.elapsed(),
            scan: scan_metrics,
            resolve,
            render,
            discarded: resolution.discarded,
            markup_flagged: resolution.markup_flagged,
            markup_rejected: resolution.markup_rejected,
        };
        RunResult { html, references, metrics }
    }

    /// Annotate `text`, discarding metrics.
    pub fn run(&self, text: &str, options: &Options) -> (String, Vec<Reference>) {
        let result = self.run_with_metrics(text, options);
        (result.html, result.references)
    }
}
