//! Whole-document JSON persistence.
//!
//! Each registry keeps its records in one JSON file and rewrites the file
//! in full on every mutation. Writes go through a sibling temp file and a
//! rename, so readers never observe a half-written document.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Load a document, falling back to `T::default()` when the file is absent.
///
/// An unreadable or unparsable file is also recovered as a default
/// document: the condition is logged for the operator but never surfaced
/// as a hard failure, at the cost of the on-disk content being replaced on
/// the next save.
pub fn load<T: DeserializeOwned + Default>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(document) => document,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "store file is unparsable, starting from an empty document"
                );
                T::default()
            }
        },
        Err(error) if error.kind() == io::ErrorKind::NotFound => T::default(),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                %error,
                "store file is unreadable, starting from an empty document"
            );
            T::default()
        }
    }
}

/// Serialize and atomically replace the document on disk.
///
/// Parent directories are created as needed. The temp file lives in the
/// same directory as the target so the final rename stays on one
/// filesystem.
pub fn save<T: Serialize>(path: &Path, document: &T) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)?;

    let json = serde_json::to_string_pretty(document)?;
    let mut staged = NamedTempFile::new_in(&parent)?;
    staged.write_all(json.as_bytes())?;
    staged.write_all(b"\n")?;
    staged
        .persist(path)
        .map_err(|error| StoreError::Io(error.error))?;
    Ok(())
}
