use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::{Result, Storage, StoreError};
use crate::models::Item;

/// What to do when the item file exists but cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Treat the file as an empty bag and log a warning. The next save
    /// overwrites the unreadable contents.
    #[default]
    Lenient,
    /// Refuse to load; the file is left untouched.
    Strict,
}

/// A bag stored as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
    policy: LoadPolicy,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
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
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Item>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Item file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_err(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Vec<Item>>(&content) {
            Ok(items) => {
                tracing::debug!(path = %self.path.display(), count = items.len(), "Loaded items");
                Ok(items)
            }
            Err(source) => match self.policy {
                LoadPolicy::Lenient => {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %source,
                        "Item file is unreadable, treating bag as empty"
                    );
                    Ok(Vec::new())
                }
                LoadPolicy::Strict => Err(StoreError::Corrupt {
                    path: self.path.clone(),
                    source,
                }),
            },
        }
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        // serde_json writes non-ASCII as-is, so only the indent needs setting
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        items.serialize(&mut ser)?;

        let temp = self.temp_path();
        fs::write(&temp, &buf).map_err(|e| self.io_err(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_err(e));
        }

        tracing::debug!(path = %self.path.display(), count = items.len(), "Saved items");
        Ok(())
    }
}
