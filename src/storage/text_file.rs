//! Line-oriented text file access
//!
//! Backs `menu.txt` and `completed_orders.txt`. Writes are plain
//! truncate-and-write; unlike the JSON files they are not atomic.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{BistroError, BistroResult};

/// A plain text file read and written one line at a time
#[derive(Debug, Clone)]
pub struct TextFile {
    path: PathBuf,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every line of the file
    ///
    /// Fails when the file is missing or has no lines.
    pub fn read(&self) -> BistroResult<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| {
            BistroError::Io(format!(
                "Unable to open {} for reading: {}",
                self.path.display(),
                e
            ))
        })?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                BistroError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            })?;

        if lines.is_empty() {
            return Err(BistroError::Storage(format!(
                "{} is empty",
                self.path.display()
            )));
        }

        Ok(lines)
    }

    /// Replace the whole file with `content`, newline-terminated
    pub fn write(&self, content: &str) -> BistroResult<()> {
        let mut file = self.open(OpenOptions::new().write(true).create(true).truncate(true))?;
        write_record(&mut file, content).map_err(|e| {
            BistroError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// Append one newline-terminated record
    pub fn append(&self, record: &str) -> BistroResult<()> {
        let mut file = self.open(OpenOptions::new().create(true).append(true))?;
        write_record(&mut file, record).map_err(|e| {
            BistroError::Io(format!("Failed to append to {}: {}", self.path.display(), e))
        })
    }

    /// Truncate the file to zero length
    pub fn clear(&self) -> BistroResult<()> {
        self.open(OpenOptions::new().write(true).create(true).truncate(true))?;
        Ok(())
    }

    fn open(&self, options: &OpenOptions) -> BistroResult<File> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BistroError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        options.open(&self.path).map_err(|e| {
            BistroError::Io(format!("Unable to open {}: {}", self.path.display(), e))
        })
    }
}

fn write_record(file: &mut File, content: &str) -> std::io::Result<()> {
    file.write_all(content.as_bytes())?;
    if !content.ends_with('\n') {
        file.write_all(b"\n")?;
    }
    file.flush()
}
