//! Annotated export of a directory of HTML documents.
//!
//! The export mirrors the input tree. Each discovered document yields two
//! files next to where it sat in the input:
//!
//! ```text
//! dir/arretes/ap-2006.html ──► arretes/ap-2006_annotated.html   annotated markup
//!                          └─► arretes/ap-2006_refs.json        references, pretty JSON
//! ```
//!
//! The result can be written out as a directory tree, packed into a ZIP
//! archive, or both. Discovery and decoding are shared with the index.

use crate::error::IndexError;
use crate::index::{discover_html_files, read_document};
use crate::{Options, Registry, annotate_with_registry, default_registry};
use std::fs::{self, File};
use std::io::{Seek, Write};
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// One output file, addressed relative to the export root with `/`
/// separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: String,
    pub contents: String,
}

/// Annotated copies of every HTML document under a directory.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedExport {
    files: Vec<ExportedFile>,
    documents: usize,
    references: usize,
}

impl AnnotatedExport {
    /// Annotate every HTML document under `dir` with the built-in rules.
    pub fn build(dir: &Path) -> Result<Self, IndexError> {
        Self::build_with(dir, default_registry(), &Options::default())
    }

    pub fn build_with(dir: &Path, registry: &Registry, options: &Options) -> Result<Self, IndexError> {
        let sources = discover_html_files(dir)?;
        tracing::info!(dir = %dir.display(), files = sources.len(), "exporting directory");

        let mut export = AnnotatedExport::default();
        for path in sources {
            let raw = read_document(&path)?;
            let annotation = annotate_with_registry(&raw, registry, options);
            let refs = serde_json::to_string_pretty(&annotation.references)?;

            let stem = output_stem(path.strip_prefix(dir).unwrap_or(&path));
            tracing::debug!(file = %path.display(), references = annotation.references.len(), "exported document");

            export.documents += 1;
            export.references += annotation.references.len();
            export.files.push(ExportedFile { path: format!("{stem}_annotated.html"), contents: annotation.html });
            export.files.push(ExportedFile { path: format!("{stem}_refs.json"), contents: refs });
        }

        Ok(export)
    }

    /// Output files, two per document, in discovery order.
    pub fn files(&self) -> &[ExportedFile] {
        &self.files
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    /// References across all documents.
    pub fn references(&self) -> usize {
        self.references
    }

    /// Write the mirrored tree under `root`, creating directories as needed.
    /// Existing files with the same names are overwritten.
    pub fn write_to_dir(&self, root: &Path) -> Result<(), IndexError> {
        for file in &self.files {
            let target = root.join(&file.path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| IndexError::Write { path: parent.to_path_buf(), source })?;
            }
            fs::write(&target, &file.contents).map_err(|source| IndexError::Write { path: target.clone(), source })?;
        }
        Ok(())
    }

    /// Pack the output files into a deflated ZIP archive written to `writer`.
    pub fn write_zip<W: Write + Seek>(&self, writer: W) -> Result<W, IndexError> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(writer);
        for file in &self.files {
            zip.start_file(file.path.as_str(), options)?;
            zip.write_all(file.contents.as_bytes()).map_err(zip::result::ZipError::Io)?;
        }
        Ok(zip.finish()?)
    }

    /// Create (or truncate) the archive at `path` and pack the output files.
    pub fn write_zip_file(&self, path: &Path) -> Result<(), IndexError> {
        let file = File::create(path).map_err(|source| IndexError::Write { path: path.to_path_buf(), source })?;
        self.write_zip(file)?;
        Ok(())
    }
}

/// `a/b/doc.html` → `a/b/doc`, always `/`-separated.
fn output_stem(relative: &Path) -> String {
    let mut parts: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let stem = relative.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    parts.push(stem);
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;
    use std::io::{Cursor, Read};
    use tempfile::TempDir;
    use zip::ZipArchive;

    const DECREE: &str = "<p>Vu le décret n° 77-1133 du 21 septembre 1977.</p>";
    const ORDER: &str = "<p>Vu l'arrêté préfectoral du 15 juin 2004 et la loi du 12 janvier 2010.</p>";

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("arretes").join("2004")).unwrap();
        fs::create_dir_all(root.join("__MACOSX")).unwrap();
        fs::write(root.join("decret.html"), DECREE).unwrap();
        fs::write(root.join("arretes").join("2004").join("ap.html"), ORDER).unwrap();
        fs::write(root.join("._decret.html"), DECREE).unwrap();
        fs::write(root.join("__MACOSX").join("ap.html"), ORDER).unwrap();
        fs::write(root.join("readme.txt"), DECREE).unwrap();
        dir
    }

    fn paths(export: &AnnotatedExport) -> Vec<&str> {
        export.files().iter().map(|f| f.path.as_str()).collect()
    }

    #[test]
    fn mirrors_the_input_tree() {
        let input = sample_tree();
        let export = AnnotatedExport::build(input.path()).unwrap();

        assert_eq!(
            paths(&export),
            vec![
                "arretes/2004/ap_annotated.html",
                "arretes/2004/ap_refs.json",
                "decret_annotated.html",
                "decret_refs.json",
            ]
        );
        assert_eq!(export.documents(), 2);
        assert_eq!(export.references(), 3);
    }

    #[test]
    fn refs_json_lists_the_rendered_references() {
        let input = sample_tree();
        let export = AnnotatedExport::build(input.path()).unwrap();

        let refs = &export.files()[1];
        assert_eq!(refs.path, "arretes/2004/ap_refs.json");
        assert!(refs.contents.starts_with("[\n  {\n    \"start\": "));
        assert!(refs.contents.contains("\"text\": \"arrêté préfectoral du 15 juin 2004\""));

        let json: serde_json::Value = serde_json::from_str(&refs.contents).unwrap();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["type"], Category::ArretePrefectoral.as_str());
        assert_eq!(items[1]["type"], "loi");
        assert_eq!(items[1]["normalized"], "loi du 12 janvier 2010");
        assert_eq!(items[1]["href"], "#ref:loi:loi-du-12-janvier-2010");

        let html = &export.files()[0];
        assert!(html.contents.contains(r##"<a href="#ref:loi:loi-du-12-janvier-2010""##));
    }

    #[test]
    fn writes_the_tree_to_disk() {
        let input = sample_tree();
        let out = TempDir::new().unwrap();
        let export = AnnotatedExport::build(input.path()).unwrap();
        export.write_to_dir(out.path()).unwrap();

        let written = fs::read_to_string(out.path().join("arretes").join("2004").join("ap_annotated.html")).unwrap();
        assert_eq!(written, export.files()[0].contents);
        assert!(out.path().join("decret_refs.json").is_file());
        assert!(!out.path().join("__MACOSX").exists());
    }

    #[test]
    fn zip_holds_every_output_file() {
        let input = sample_tree();
        let export = AnnotatedExport::build(input.path()).unwrap();

        let cursor = export.write_zip(Cursor::new(Vec::new())).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(cursor.into_inner())).unwrap();
        assert_eq!(archive.len(), 4);

        let mut contents = String::new();
        archive.by_name("decret_refs.json").unwrap().read_to_string(&mut contents).unwrap();
        assert_eq!(contents, export.files()[3].contents);
        assert!(contents.contains("\"normalized\": \"décret n° 77-1133 du 21 septembre 1977\""));
    }

    #[test]
    fn zip_file_is_created_at_the_given_path() {
        let input = sample_tree();
        let out = TempDir::new().unwrap();
        let target = out.path().join("annotated.zip");

        AnnotatedExport::build(input.path()).unwrap().write_zip_file(&target).unwrap();
        let archive = ZipArchive::new(File::open(&target).unwrap()).unwrap();
        assert_eq!(archive.len(), 4);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(AnnotatedExport::build(&missing), Err(IndexError::NotADirectory(_))));
    }

    #[test]
    fn output_stem_uses_forward_slashes() {
        assert_eq!(output_stem(&Path::new("a").join("b").join("doc.html")), "a/b/doc");
        assert_eq!(output_stem(Path::new("doc.html")), "doc");
    }
}
