//! Reference index over a directory of HTML documents.
//!
//! A `ReferenceIndex` is built fresh for each directory scan and owned by
//! whoever asked for it. It groups the references of every document by
//! category and gives each one a sequential id for lookups.
//!
//! ```text
//! dir ── discover *.html ── annotate each file ── IndexedReference { id, .. }
//!                                                      │
//!                                 items (by id) ◄──────┴──────► tree (by category)
//! ```

use crate::error::IndexError;
use crate::{Category, Options, Reference, Registry, annotate_with_registry, default_registry};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Characters of context kept on each side of a reference in its snippet.
const SNIPPET_CONTEXT: usize = 100;

/// One reference, with where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedReference {
    pub id: u32,
    #[serde(rename = "type")]
    pub category: Category,
    pub text: String,
    pub normalized: String,
    pub file: String,
    /// First French date written in the reference text, as written.
    pub date_text: Option<String>,
    /// `date_text` as a calendar date, when it names a real day.
    pub date: Option<NaiveDate>,
    /// The reference with surrounding context, on one line.
    pub snippet: String,
    pub href: String,
}

/// Compact entry of [`ReferenceIndex::tree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    pub id: u32,
    pub text: String,
    pub file: String,
    pub date_text: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct ReferenceIndex {
    items: BTreeMap<u32, IndexedReference>,
    /// Categories in first-seen order, with the ids filed under each.
    order: Vec<(Category, Vec<u32>)>,
    next_id: u32,
}

impl Default for ReferenceIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceIndex {
    pub fn new() -> Self {
        ReferenceIndex { items: BTreeMap::new(), order: Vec::new(), next_id: 1 }
    }

    /// Index every HTML document under `dir` with the built-in rules.
    pub fn build(dir: &Path) -> Result<Self, IndexError> {
        Self::build_with(dir, default_registry(), &Options::default())
    }

    pub fn build_with(dir: &Path, registry: &Registry, options: &Options) -> Result<Self, IndexError> {
        let files = discover_html_files(dir)?;
        tracing::info!(dir = %dir.display(), files = files.len(), "indexing directory");

        let mut index = ReferenceIndex::new();
        for path in files {
            let raw = read_document(&path)?;
            let added = index.add_document_with(&path.to_string_lossy(), &raw, registry, options);
            tracing::debug!(file = %path.display(), references = added, "indexed document");
        }

        Ok(index)
    }

    /// Annotate `raw` with the built-in rules and index its references under
    /// `file`. Returns how many were added.
    pub fn add_document(&mut self, file: &str, raw: &str) -> usize {
        self.add_document_with(file, raw, default_registry(), &Options::default())
    }

    pub fn add_document_with(&mut self, file: &str, raw: &str, registry: &Registry, options: &Options) -> usize {
        let annotation = annotate_with_registry(raw, registry, options);
        let count = annotation.references.len();
        for reference in annotation.references {
            self.insert(file, raw, reference);
        }
        count
    }

    fn insert(&mut self, file: &str, raw: &str, reference: Reference) {
        let id = self.next_id;
        self.next_id += 1;

        let found = find_date(&reference.raw_text).or_else(|| find_date(&reference.normalized_text));
        let (date_text, date) = match found {
            Some(found) => (Some(found.text.to_string()), found.date),
            None => (None, None),
        };
        let item = IndexedReference {
            id,
            category: reference.category,
            snippet: snippet(raw, reference.start, reference.end),
            text: reference.raw_text,
            normalized: reference.normalized_text,
            file: file.to_string(),
            date_text,
            date,
            href: reference.href,
        };

        match self.order.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, ids)) => ids.push(id),
            None => self.order.push((item.category, vec![id])),
        }
        self.items.insert(id, item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&IndexedReference> {
        self.items.get(&id)
    }

    /// All items, by id.
    pub fn items(&self) -> impl Iterator<Item = &IndexedReference> {
        self.items.values()
    }

    /// Categories present, in the order they were first seen.
    pub fn categories(&self) -> Vec<Category> {
        self.order.iter().map(|(category, _)| *category).collect()
    }

    /// Items of one category, by id.
    pub fn by_category(&self, category: Category) -> Vec<&IndexedReference> {
        self.order
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, ids)| ids.iter().filter_map(|id| self.items.get(id)).collect())
            .unwrap_or_default()
    }

    /// Category → compact entries, categories in first-seen order.
    pub fn tree(&self) -> Vec<(Category, Vec<TreeEntry>)> {
        self.order
            .iter()
            .map(|(category, ids)| {
                let entries = ids
                    .iter()
                    .filter_map(|id| self.items.get(id))
                    .map(|item| TreeEntry {
                        id: item.id,
                        text: item.text.clone(),
                        file: item.file.clone(),
                        date_text: item.date_text.clone(),
                        date: item.date,
                    })
                    .collect();
                (*category, entries)
            })
            .collect()
    }

    /// Category → entries, keyed by category tag.
    pub fn classification(&self) -> BTreeMap<&'static str, Vec<TreeEntry>> {
        self.tree().into_iter().map(|(category, entries)| (category.as_str(), entries)).collect()
    }
}

/// Every `*.html` file under `dir`, sorted by path.
///
/// Skips resource-fork artifacts: anything under a `__MACOSX` directory and
/// files whose name starts with `._`.
pub fn discover_html_files(dir: &Path) -> Result<Vec<PathBuf>, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let is_html = path.extension().is_some_and(|ext| ext == "html");
        let is_artifact = path.to_string_lossy().contains("__MACOSX")
            || entry.file_name().to_string_lossy().starts_with("._");
        if is_html && !is_artifact {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// `raw` from up to [`SNIPPET_CONTEXT`] characters before `start` to up to as
/// many after `end`, newlines flattened to spaces.
fn snippet(raw: &str, start: usize, end: usize) -> String {
    let from = raw[..start].char_indices().rev().nth(SNIPPET_CONTEXT - 1).map_or(0, |(i, _)| i);
    let to = raw[end..].char_indices().nth(SNIPPET_CONTEXT).map_or(raw.len(), |(i, _)| end + i);
    raw[from..to].replace('\n', " ")
}

/// Read a document as UTF-8, dropping invalid byte sequences.
pub(crate) fn read_document(path: &Path) -> Result<String, IndexError> {
    let bytes = std::fs::read(path).map_err(|source| IndexError::Read { path: path.to_path_buf(), source })?;
    Ok(decode_dropping_invalid(&bytes))
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

/// A date spotted in reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundDate<'a> {
    /// The date as written, e.g. `1er mars 2006`.
    pub text: &'a str,
    /// `None` when the text names no real day, e.g. `31 février 2001`.
    pub date: Option<NaiveDate>,
}

/// First `1er|<day> <mois> <yyyy>` date written in `text`.
pub fn find_date(text: &str) -> Option<FoundDate<'_>> {
    let caps = regex!(
        r"(?i)(1er|[0-3]?\d)\s+(janvier|février|fevrier|mars|avril|mai|juin|juillet|août|aout|septembre|octobre|novembre|décembre|decembre)\s+(\d{4})"
    )
    .captures(text)?;

    let date = calendar_date(&caps[1], &caps[2], &caps[3]);
    Some(FoundDate { text: caps.get(0)?.as_str(), date })
}

fn calendar_date(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let day = if day.eq_ignore_ascii_case("1er") { 1 } else { day.parse().ok()? };
    let month = month_number(&month.to_lowercase())?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name {
        "janvier" => 1,
        "février" | "fevrier" => 2,
        "mars" => 3,
        "avril" => 4,
        "mai" => 5,
        "juin" => 6,
        "juillet" => 7,
        "août" | "aout" => 8,
        "septembre" => 9,
        "octobre" => 10,
        "novembre" => 11,
        "décembre" | "decembre" => 12,
        _ => return None,
    };
    Some(month)
}
