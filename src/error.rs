//! Error types.
//!
//! The annotation path itself has no caller-facing errors: a registry is
//! validated when it is built, and normalization failures are recovered per
//! match. What remains is configuration (building a registry) and the
//! filesystem side of the reference index.

use crate::Category;
use std::path::PathBuf;
use thiserror::Error;

/// A rule table could not be turned into a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("rule #{index} ({category}) has an invalid pattern: {source}")]
    InvalidPattern {
        index: usize,
        category: Category,
        #[source]
        source: regex::Error,
    },
    #[error("rule #{index} ({category}) has an invalid not_followed_by pattern: {source}")]
    InvalidLookahead {
        index: usize,
        category: Category,
        #[source]
        source: regex::Error,
    },
    #[error("a registry needs at least one rule")]
    Empty,
}

/// A normalizer could not produce a canonical form for a matched span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("normalized text is blank")]
    Blank,
}

/// Failure while indexing or exporting a directory of documents, see
/// [`ReferenceIndex`](crate::index::ReferenceIndex) and
/// [`AnnotatedExport`](crate::export::AnnotatedExport).
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("directory not found: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize references: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// A string that is not one of the category tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reference category '{0}'")]
pub struct UnknownCategory(pub String);
