//! JSON file helpers
//!
//! Reads fall back to the default value for a missing file. Writes replace
//! the target through a synced sibling temp file.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TallyError;

fn storage_error(action: &str, path: &Path, e: impl Display) -> TallyError {
    TallyError::Storage(format!("Failed to {} {}: {}", action, path.display(), e))
}

/// Read JSON from `path`, or `T::default()` when the file does not exist
pub fn read_json<T, P>(path: P) -> Result<T, TallyError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace `path` with the pretty-printed JSON of `data`.
///
/// The previous contents survive any failure before the final rename.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), TallyError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| storage_error("create directory", dir, e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let result = write_synced(&temp_path, data)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| storage_error("replace", path, e)));
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_synced<T: Serialize>(path: &Path, data: &T) -> Result<(), TallyError> {
    let file = File::create(path).map_err(|e| storage_error("create", path, e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", path, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| storage_error("flush", path, e.error()))?;
    file.sync_all().map_err(|e| storage_error("sync", path, e))
}
