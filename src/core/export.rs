// LogSieve - core/export.rs
//
// CSV and JSON export of visible log lines.
// Core layer: writes to any Write trait object.

use crate::core::model::VisibleLine;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Output format for an export, chosen from the target file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// `.csv` or `.json` (case-insensitive). Anything else is rejected.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Export lines to CSV with a `level,text` header.
pub fn export_csv<W: Write>(
    lines: &[VisibleLine],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let csv_err = |e| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    csv_writer.write_record(["level", "text"]).map_err(csv_err)?;

    for line in lines {
        csv_writer
            .write_record([line.level.label(), line.text.as_str()])
            .map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(lines.len())
}

/// Export lines to JSON (array of `{text, level}` objects).
pub fn export_json<W: Write>(
    lines: &[VisibleLine],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, lines).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(lines.len())
}
