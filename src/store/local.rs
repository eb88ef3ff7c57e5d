//! Schedule stored as a plain CSV file on disk.
//!
//! The version marker is the SHA-256 of the file content. Writes compare the
//! marker against the current content and then replace the file through a
//! temp file in the same directory.

use super::{RemoteStore, Snapshot, VersionMarker};
use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct LocalFileStore {
    path: PathBuf,
}

pub fn content_hash(bytes: &[u8]) -> VersionMarker {
    VersionMarker::new(format!("{:x}", Sha256::digest(bytes)))
}

impl LocalFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn current(&self) -> AppResult<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl RemoteStore for LocalFileStore {
    fn read(&self) -> AppResult<Option<Snapshot>> {
        Ok(self.current()?.map(|bytes| {
            let marker = content_hash(&bytes);
            Snapshot { bytes, marker }
        }))
    }

    fn write(&self, bytes: &[u8], expected: Option<&VersionMarker>) -> AppResult<VersionMarker> {
        let current = self.current()?.map(|b| content_hash(&b));

        match (expected, &current) {
            (None, None) => {}
            (Some(exp), Some(cur)) if exp == cur => {}
            (None, Some(_)) => {
                return Err(AppError::Conflict(format!(
                    "{} was created meanwhile",
                    self.path.display()
                )));
            }
            (Some(_), None) => {
                return Err(AppError::Conflict(format!(
                    "{} was removed meanwhile",
                    self.path.display()
                )));
            }
            (Some(exp), Some(cur)) => {
                return Err(AppError::Conflict(format!(
                    "expected version {}, found {}",
                    exp, cur
                )));
            }
        }

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(bytes)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        Ok(content_hash(bytes))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
