// LogSieve - app/state.rs
//
// Viewer state: the loaded document, its derived category registry, the
// current per-category settings and the user actions that change them.
// Owned by the presentation layer.

use crate::core::export::{self, ExportFormat};
use crate::core::filter::{self, FilterResult};
use crate::core::model::{ParsedEntry, Severity};
use crate::core::parser;
use crate::core::registry::CategoryRegistry;
use crate::core::settings::{derive_default_settings, CategorySettings};
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::{ExportError, ReadError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A parsed document and everything derived from its text.
///
/// Immutable once built; loading another file replaces it wholesale.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the text came from, if it was read from disk.
    pub source: Option<PathBuf>,
    pub entries: Vec<ParsedEntry>,
    pub registry: CategoryRegistry,
    /// Settings derived from this document's text. "Revert levels" always
    /// goes back to these, never to an edited copy.
    pub defaults: CategorySettings,
    pub lines_processed: usize,
}

impl Document {
    /// Run the parse -> registry -> defaults pipeline over `content`.
    pub fn from_content(content: &str, source: Option<PathBuf>) -> Self {
        let parsed = parser::parse_content(content);
        let registry = CategoryRegistry::from_entries(&parsed.entries);
        let defaults = derive_default_settings(&registry);
        Self {
            source,
            entries: parsed.entries,
            registry,
            defaults,
            lines_processed: parsed.lines_processed,
        }
    }
}

/// Top-level viewer state.
#[derive(Debug, Default)]
pub struct ViewerState {
    /// Currently loaded document (None before the first load or after a
    /// failed read).
    pub document: Option<Document>,

    /// Current per-category settings. Keys always match the document's
    /// categories.
    pub settings: CategorySettings,

    /// Message for the user after the last read failure.
    pub error: Option<String>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current document with `content`, resetting settings to
    /// the new document's defaults.
    pub fn load_content(&mut self, content: &str, source: Option<PathBuf>) {
        let document = Document::from_content(content, source);
        self.settings = document.defaults.clone();
        self.error = None;
        tracing::info!(
            source = ?document.source,
            entries = document.entries.len(),
            lines = document.lines_processed,
            categories = document.registry.len(),
            "Document loaded"
        );
        self.document = Some(document);
    }

    /// Read `path` and load it. On failure the state is cleared, the
    /// user-facing message is stored in `error`, and the cause is returned.
    pub fn load_file(&mut self, path: &Path, max_size: u64) -> Result<(), ReadError> {
        match fs::read_log_file(path, max_size) {
            Ok(content) => {
                self.load_content(&content, Some(path.to_path_buf()));
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read log file");
                self.clear();
                self.error = Some(constants::READ_FAILURE_MESSAGE.to_string());
                Err(e)
            }
        }
    }

    /// Drop the document and all derived state.
    pub fn clear(&mut self) {
        self.document = None;
        self.settings = CategorySettings::default();
        self.error = None;
    }

    /// Registry of the loaded document.
    pub fn registry(&self) -> Option<&CategoryRegistry> {
        self.document.as_ref().map(|d| &d.registry)
    }

    /// Sorted category names of the loaded document.
    pub fn categories(&self) -> Vec<&str> {
        self.registry()
            .map(|r| r.categories().collect())
            .unwrap_or_default()
    }

    /// Categories matching the search box text.
    pub fn search_categories(&self, query: &str) -> Vec<&str> {
        self.registry()
            .map(|r| r.search(query))
            .unwrap_or_default()
    }

    /// Whether `category` exists in the loaded document.
    pub fn has_category(&self, category: &str) -> bool {
        self.settings.contains(category)
    }

    // -------------------------------------------------------------------------
    // User actions
    // -------------------------------------------------------------------------

    pub fn toggle_category(&mut self, category: &str) {
        self.settings = self.settings.toggled(category);
    }

    pub fn set_category_enabled(&mut self, category: &str, enabled: bool) {
        self.settings = self.settings.with_enabled(category, enabled);
    }

    pub fn set_category_level(&mut self, category: &str, level: Severity) {
        self.settings = self.settings.with_level(category, level);
    }

    pub fn enable_all(&mut self) {
        self.settings = self.settings.with_all_enabled();
    }

    pub fn disable_all(&mut self) {
        self.settings = self.settings.with_all_disabled();
    }

    /// Reset every category's minimum level to the default derived from the
    /// loaded document's text. Enabled flags are kept.
    pub fn revert_levels(&mut self) {
        if let Some(doc) = &self.document {
            self.settings = self.settings.with_default_levels(&doc.defaults);
        }
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    /// Lines visible under the current settings.
    pub fn visible(&self) -> FilterResult {
        match &self.document {
            Some(doc) => filter::filter_entries(&doc.entries, &self.settings),
            None => FilterResult::default(),
        }
    }

    /// Write the currently visible lines to `path` as CSV or JSON, chosen
    /// by the file extension. Returns the number of lines written.
    pub fn export_visible(&self, path: &Path) -> Result<usize, ExportError> {
        let format = ExportFormat::from_path(path)?;
        let lines = self.visible().lines;

        let io_err = |e| ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        };
        let file = std::fs::File::create(path).map_err(io_err)?;
        let mut writer = std::io::BufWriter::new(file);

        let count = match format {
            ExportFormat::Csv => export::export_csv(&lines, &mut writer, path)?,
            ExportFormat::Json => export::export_json(&lines, &mut writer, path)?,
        };
        writer.flush().map_err(io_err)?;

        tracing::info!(path = %path.display(), lines = count, ?format, "Export written");
        Ok(count)
    }
}
