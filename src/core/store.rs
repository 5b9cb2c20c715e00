//! Saved sessions: one JSON file holding an array of session logs

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::info;

use crate::error::SessionError;
use crate::types::TurnRecord;

/// Append-only store of finished session logs
///
/// Clones share one write lock, so concurrent appends through any clone
/// never drop each other's logs.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every saved log; a missing file means none yet
    pub fn load_all(&self) -> Result<Vec<Vec<TurnRecord>>, SessionError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Append one log, returning how many logs the file now holds
    pub fn append(&self, log: &[TurnRecord]) -> Result<usize, SessionError> {
        // Held across read-modify-write; the guarded data is unit, so a
        // poisoned lock is safe to reuse
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut saved = self.load_all()?;
        saved.push(log.to_vec());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let json = serde_json::to_string_pretty(&saved)?;

        // Readers only ever see the old file or the new one
        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;

        info!(
            "saved session ({} turns) to {} [{} total]",
            log.len(),
            self.path.display(),
            saved.len()
        );
        Ok(saved.len())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
