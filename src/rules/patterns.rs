//! Shared pattern fragments.
//!
//! Fragments are plain pattern sources, spliced into rule patterns with
//! `format!`. They contain no capture groups so they can be reused freely.

/// French month names, including unaccented variants produced by OCR.
pub const MONTHS: &str =
    "janvier|février|fevrier|mars|avril|mai|juin|juillet|août|aout|septembre|octobre|novembre|décembre|decembre";

/// A written-out French date: `1er mai 2001`, `21 septembre 1977`.
pub fn date() -> String {
    format!(r"(?:1er|[0-3]?\d)\s+(?:{MONTHS})\s+\d{{4}}")
}

/// `arrêté` with or without its accents.
pub const ARRETE: &str = r"(?:arrêté|arrete)";

/// Optional issue number as written before `du <date>`: `n° 2004-12 `.
pub const OPTIONAL_NUMBER: &str = r"(?:n[°ºo]\s*[\d/-]+\s+)?";
