//! JSON document boundary
//!
//! Reading and writing the library and change-set files. Output goes through
//! `serde_json::Value`, whose maps are sorted, so keys come out in
//! lexicographic order and identical documents serialize to identical bytes.

use crate::error::{HighspotError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Which input a zero-byte file stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// The library snapshot
    Source,
    /// The change set
    Changes,
}

impl DocumentKind {
    fn empty_error(self, path: &Path) -> HighspotError {
        let path = PathBuf::from(path);
        match self {
            DocumentKind::Source => HighspotError::EmptySource(path),
            DocumentKind::Changes => HighspotError::EmptyChanges(path),
        }
    }
}

/// Load and parse a JSON document
///
/// A zero-byte file fails with `EmptySource` / `EmptyChanges` depending on
/// `kind`; anything else that is not valid JSON fails with `Parse`.
pub fn load_document<T: DeserializeOwned>(path: &Path, kind: DocumentKind) -> Result<T> {
    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(kind.empty_error(path));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded document");
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serialize with sorted keys and two-space indentation
pub fn to_sorted_json<T: Serialize>(value: &T) -> Result<String> {
    let value = serde_json::to_value(value)?;
    let mut json = serde_json::to_string_pretty(&value)?;
    json.push('\n');
    Ok(json)
}

/// Write a document, atomically replacing `path`
///
/// The JSON goes to a temporary file in the destination directory which is
/// then renamed over `path`, so readers see the old file or the new one.
pub fn save_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = to_sorted_json(value)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), "Saved document");
    Ok(())
}
