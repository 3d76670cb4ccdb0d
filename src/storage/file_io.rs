//! JSON snapshot files
//!
//! The session snapshot is replaced wholesale on every change. It is written
//! to a sibling `.json.tmp` file, synced, then renamed over the old one, so a
//! reader sees either the previous snapshot or the new one.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BistroError;

/// Read a snapshot; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, BistroError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(snapshot_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| snapshot_error("parse", path, e))
}

/// Replace the snapshot at `path` with `data`
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BistroError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| snapshot_error("create directory for", path, e))?;
    }

    let staging = path.with_extension("json.tmp");
    let result = write_staged(&staging, data).and_then(|()| {
        fs::rename(&staging, path).map_err(|e| snapshot_error("replace", path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn write_staged<T: Serialize>(staging: &Path, data: &T) -> Result<(), BistroError> {
    let file = File::create(staging).map_err(|e| snapshot_error("create", staging, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| snapshot_error("serialize", staging, e))?;
    writer.flush().map_err(|e| snapshot_error("flush", staging, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| snapshot_error("sync", staging, e))
}

fn snapshot_error(action: &str, path: &Path, err: impl std::fmt::Display) -> BistroError {
    BistroError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}
