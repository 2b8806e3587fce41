//! Filesystem storage backend.
//!
//! Walks a source directory for `.md` and `.mdx` files and turns each into a
//! [`Document`]. Hidden files and directories are skipped. Files are visited
//! in sorted order so scans are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use crate::front_matter::{extract_h1, parse_front_matter, split_front_matter};
use crate::storage::{Document, Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Fs";

/// Markdown extensions recognised as pages.
const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Storage backed by a directory of Markdown files.
#[derive(Debug, Clone)]
pub struct FsStorage {
    source_dir: PathBuf,
}

impl FsStorage {
    /// Create a storage rooted at `source_dir`.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn build_document(&self, path: &Path) -> Result<Document, StorageError> {
        let rel_path = path.strip_prefix(&self.source_dir).map_err(|_| {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_backend(BACKEND)
                .with_path(path)
        })?;
        let slug = file_path_to_slug(rel_path).ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_backend(BACKEND)
                .with_path(path)
        })?;

        let content =
            fs::read_to_string(path).map_err(|e| StorageError::io(e, path).with_backend(BACKEND))?;
        let (yaml, body) = split_front_matter(&content);
        let front_matter = parse_front_matter(yaml.unwrap_or_default()).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidFrontMatter)
                .with_backend(BACKEND)
                .with_path(path)
                .with_source(e)
        })?;

        let title = front_matter
            .title
            .or_else(|| extract_h1(body).map(str::to_owned))
            .unwrap_or_else(|| fallback_title(&slug));

        tracing::debug!(slug = %slug, path = %path.display(), "Scanned page");

        Ok(Document {
            slug,
            title,
            description: front_matter.description,
            source: Some(path.to_path_buf()),
        })
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<Document>, StorageError> {
        if !self.source_dir.exists() {
            tracing::warn!(
                source_dir = %self.source_dir.display(),
                "Source directory does not exist"
            );
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        collect_markdown_files(&self.source_dir, &mut files)?;
        files.sort();

        let documents = files
            .iter()
            .map(|path| self.build_document(path))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            pages = documents.len(),
            source_dir = %self.source_dir.display(),
            "Scanned content"
        );
        Ok(documents)
    }
}

/// Recursively collect Markdown files, skipping hidden entries.
fn collect_markdown_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), StorageError> {
    let entries = fs::read_dir(dir).map_err(|e| StorageError::io(e, dir).with_backend(BACKEND))?;

    for entry in entries {
        let entry = entry.map_err(|e| StorageError::io(e, dir).with_backend(BACKEND))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            collect_markdown_files(&path, out)?;
        } else if path
            .extension()
            .is_some_and(|e| EXTENSIONS.iter().any(|ext| e == *ext))
        {
            out.push(path);
        }
    }

    Ok(())
}

/// Convert a path relative to the source directory into a slug.
///
/// - `index.md` -> `""`
/// - `guide.md` -> `"guide"`
/// - `commands/index.mdx` -> `"commands"`
/// - `commands/feature.md` -> `"commands/feature"`
///
/// Returns `None` if a component is not valid UTF-8.
pub(crate) fn file_path_to_slug(rel_path: &Path) -> Option<String> {
    let without_ext = rel_path.with_extension("");
    let segments = without_ext
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;

    let segments = match segments.split_last() {
        Some((&"index", parents)) => parents,
        _ => &segments[..],
    };

    Some(segments.join("/"))
}

/// Title used when neither front matter nor an H1 provides one.
fn fallback_title(slug: &str) -> String {
    match slug.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => "Home".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_file_path_to_slug() {
        assert_eq!(file_path_to_slug(Path::new("index.md")).unwrap(), "");
        assert_eq!(file_path_to_slug(Path::new("guide.md")).unwrap(), "guide");
        assert_eq!(
            file_path_to_slug(Path::new("commands/index.mdx")).unwrap(),
            "commands"
        );
        assert_eq!(
            file_path_to_slug(Path::new("commands/feature.md")).unwrap(),
            "commands/feature"
        );
        assert_eq!(file_path_to_slug(Path::new("a/b/c.md")).unwrap(), "a/b/c");
    }

    #[test]
    fn test_fallback_title() {
        assert_eq!(fallback_title("commands/feature"), "feature");
        assert_eq!(fallback_title("commands"), "commands");
        assert_eq!(fallback_title(""), "Home");
    }

    #[test]
    fn test_scan_missing_dir_is_empty() {
        let temp = tempfile::tempdir().unwrap();
        let storage = FsStorage::new(temp.path().join("missing"));

        assert!(storage.scan().unwrap().is_empty());
    }

    #[test]
    fn test_scan_resolves_titles_and_slugs() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(root, "index.md", "# Welcome\n");
        write(
            root,
            "commands/feature.md",
            "---\ntitle: Feature\ndescription: Plan a feature\n---\n# Ignored\n",
        );
        write(root, "commands/review.mdx", "# Review Command\n");
        write(root, "skills/testing.md", "No heading here.\n");

        let docs = FsStorage::new(root.to_path_buf()).scan().unwrap();

        let summary: Vec<_> = docs
            .iter()
            .map(|d| (d.slug.as_str(), d.title.as_str(), d.description.as_deref()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("commands/feature", "Feature", Some("Plan a feature")),
                ("commands/review", "Review Command", None),
                ("", "Welcome", None),
                ("skills/testing", "testing", None),
            ]
        );
        assert_eq!(
            docs[0].source.as_deref(),
            Some(root.join("commands/feature.md").as_path())
        );
    }

    #[test]
    fn test_scan_skips_hidden_and_non_markdown() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(root, "guide.md", "# Guide\n");
        write(root, ".drafts/secret.md", "# Secret\n");
        write(root, ".hidden.md", "# Hidden\n");
        write(root, "assets/logo.svg", "<svg/>");
        write(root, "notes.txt", "text");

        let docs = FsStorage::new(root.to_path_buf()).scan().unwrap();

        let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["guide"]);
    }

    #[test]
    fn test_scan_reports_duplicate_slug_sources() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(root, "guide.md", "# Guide\n");
        write(root, "guide/index.md", "# Guide Index\n");

        let docs = FsStorage::new(root.to_path_buf()).scan().unwrap();

        let slugs: Vec<_> = docs.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["guide", "guide"]);
    }

    #[test]
    fn test_scan_invalid_front_matter_names_file() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(root, "broken.md", "---\ntitle: [unclosed\n---\n");

        let err = FsStorage::new(root.to_path_buf()).scan().unwrap_err();

        assert_eq!(err.kind, StorageErrorKind::InvalidFrontMatter);
        assert_eq!(err.path.as_deref(), Some(root.join("broken.md").as_path()));
        assert!(err.to_string().starts_with("[Fs] Invalid front matter"));
    }
}
