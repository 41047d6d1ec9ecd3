//! Annotation engine.
//!
//! This module is the entry point for the reference annotator. It is split
//! into focused submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! rule table (RuleSpec)  ──┐
//!                          │  Registry::from_specs          (registry.rs)
//!                          └───────────────┬──────────────
//!                                          │
//! input ── scan ───────────────────────────┤                 (scanner.rs)
//!            every rule, whole input       │
//!            normalize each match          v
//!                                  Vec<RawMatch>  (overlapping)
//!                                          │
//!                                          v
//!                                resolve_overlaps            (resolve.rs)
//!                                  - stable sort, greedy sweep
//!                                  - markup guard
//!                                          │
//!                                          v
//!                                       render               (render.rs)
//!                                  - copy gaps, emit anchors
//!                                  - href via slug.rs
//!                                          │
//!                                          v
//!                            (annotated text, Vec<Reference>)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `registry.rs`: compiles and freezes rule tables; the only place where a
//!   rule can fail (bad pattern), and only at build time.
//! - `scanner.rs`: runs every rule and normalizes each match, falling back to
//!   the raw text when a normalizer fails.
//! - `resolve.rs`: turns overlapping candidates into a sorted, disjoint set.
//! - `slug.rs`: derives the `#ref:<category>:<slug>` locator.
//! - `render.rs`: rebuilds the text with escaped anchors.
//! - `annotator.rs`: composes the phases; `metrics.rs` holds the counters.
//!
//! ## Adding rules
//!
//! Built-in rules live under `src/rules/**` and are collected by
//! `rules::get()`. Order matters: on equal spans the earlier rule wins, so
//! specific rules go before the generic ones they overlap with.

#[path = "engine/annotator.rs"]
mod annotator;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/scanner.rs"]
mod scanner;
#[path = "engine/slug.rs"]
mod slug;

pub use annotator::Annotator;
pub use metrics::RunResult;
pub use registry::{Registry, RegistryBuilder, RuleSpec};
pub use slug::{href, slug};
