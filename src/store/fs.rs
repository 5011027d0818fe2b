use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::SessionStore;
use crate::error::{ColumnsError, Result};

const DATA_FILE: &str = "selections.json";

/// File-backed session store.
///
/// Keeps all selections for one session in a single `selections.json`
/// map under the session's root directory. Give each session its own
/// root; entries within a root are partitioned by cache key, so
/// different resources never collide.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// OS-appropriate default data directory for session roots
    /// (e.g. `~/.local/share/columns-filter` on Linux).
    pub fn default_root() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "columns-filter").ok_or_else(|| {
            ColumnsError::Store("Could not determine a data directory".to_string())
        })?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILE)
    }

    fn load(&self) -> Result<HashMap<String, Vec<String>>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(ColumnsError::Io)?;
        let entries = serde_json::from_str(&content).map_err(ColumnsError::Serialization)?;
        Ok(entries)
    }

    fn save(&self, entries: &HashMap<String, Vec<String>>) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ColumnsError::Io)?;
        }

        let content = serde_json::to_string_pretty(entries).map_err(ColumnsError::Serialization)?;

        // Atomic write: one writer per session root, so a fixed tmp
        // name cannot race.
        let tmp_file = self.root.join(".selections.tmp");
        fs::write(&tmp_file, content).map_err(ColumnsError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(ColumnsError::Io)?;

        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, selection: &[String]) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), selection.to_vec());
        self.save(&entries)
    }
}
