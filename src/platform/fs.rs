// LogSieve - platform/fs.rs
//
// File reading for the viewer. Turns bytes on disk into the text blob the
// core parser consumes; the core never sees raw bytes.

use crate::util::error::ReadError;
use std::path::Path;

/// Read a whole log file as text.
///
/// Rejects directories and files larger than `max_size` bytes before
/// reading. Invalid UTF-8 sequences are replaced rather than rejected so
/// that a stray byte in a long log does not hide the rest of it.
pub fn read_log_file(path: &Path, max_size: u64) -> Result<String, ReadError> {
    let metadata = std::fs::metadata(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !metadata.is_file() {
        return Err(ReadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if metadata.len() > max_size {
        return Err(ReadError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| ReadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                valid_up_to = e.utf8_error().valid_up_to(),
                "File is not valid UTF-8; replacing invalid sequences"
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };

    tracing::debug!(path = %path.display(), bytes = content.len(), "Log file read");
    Ok(content)
}
