//! JSON-file implementation of [`SessionStore`].

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fleetgate_core::error::{GateError, GateResult};
use fleetgate_core::store::SessionStore;
use parking_lot::Mutex;
use tracing::debug;

/// A store persisted as a flat JSON object on disk.
///
/// The full map is loaded at open and held in memory; every mutation
/// writes the whole file back through a temp-file + rename, so a crash
/// mid-write never leaves a truncated session file.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories as needed.
    /// A missing file is an empty store; a malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> GateResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| storage_err(&path, "create dir", e))?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| GateError::Storage(format!("{}: malformed store: {e}", path.display())))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(storage_err(&path, "read", e)),
        };

        debug!(path = %path.display(), "opened session store");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> GateResult<()> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| GateError::Storage(format!("serialize store: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).map_err(|e| storage_err(&tmp, "write", e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_err(&self.path, "rename", e))?;
        Ok(())
    }
}

fn storage_err(path: &Path, action: &str, err: io::Error) -> GateError {
    GateError::Storage(format!("{}: {action}: {err}", path.display()))
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> GateResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> GateResult<()> {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> GateResult<()> {
        let mut entries = self.entries.lock();
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
