//! Session token persistence.
//!
//! The dashboard keeps exactly two opaque strings between launches, the
//! access and refresh tokens. [`FileTokenStore`] writes one file per key;
//! [`MemoryTokenStore`] keeps them in a map.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{DashboardError, Result};

/// Key-value capability for session tokens.
pub trait TokenStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, token: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileTokenStore
// ---------------------------------------------------------------------------

pub struct FileTokenStore {
    /// Directory holding one file per token key.
    pub dir: PathBuf,
}

impl FileTokenStore {
    /// Open a store rooted at `dir`, or the platform default when `None`.
    ///
    /// Creates the directory if it does not exist.
    pub fn new(dir: Option<PathBuf>) -> Result<Self> {
        let dir = dir.unwrap_or_else(config::default_token_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DashboardError::InvalidArgument(format!(
                "invalid token key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(key))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => {
                let token = s.trim().to_string();
                Ok((!token.is_empty()).then_some(token))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, token: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("tmp");
        let result = (|| -> Result<()> {
            fs::write(&tmp, token)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        })();
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryTokenStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    tokens: HashMap<String, String>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.tokens.get(key).cloned())
    }

    fn set(&mut self, key: &str, token: &str) -> Result<()> {
        self.tokens.insert(key.to_string(), token.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.tokens.remove(key);
        Ok(())
    }
}
