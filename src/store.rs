//! Authority-token persistence.
//!
//! ARCHITECTURE
//! ============
//! The storage backend is a trait so the CLI can keep the token in a
//! file across runs while tests inject an in-memory store. Clearing
//! writes the empty string rather than removing the entry, so a
//! deauthenticated client keeps sending `authority: ""` until the next
//! login succeeds. A store that never saw a token also loads as the
//! empty string.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Storage backend for the authority token.
pub trait TokenStore: Send + Sync {
    /// Current token; the empty string when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self) -> io::Result<String>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&self, token: &str) -> io::Result<()>;

    /// Overwrite the token with the empty string. The entry is kept,
    /// never removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&self) -> io::Result<()> {
        self.save("")
    }
}

impl<S: TokenStore + ?Sized> TokenStore for Arc<S> {
    fn load(&self) -> io::Result<String> {
        (**self).load()
    }

    fn save(&self, token: &str) -> io::Result<()> {
        (**self).save(token)
    }
}

/// Token store backed by a single file on disk.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> io::Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim_end_matches(['\r', '\n']).to_owned()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(error) => Err(error),
        }
    }

    fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, token)
    }
}

/// In-memory token store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<String>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(token.to_owned()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> io::Result<String> {
        let token = self
            .token
            .lock()
            .map_err(|_| io::Error::other("token store lock poisoned"))?;
        Ok(token.clone())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|_| io::Error::other("token store lock poisoned"))?;
        *slot = token.to_owned();
        Ok(())
    }
}

/// Default token file location: `$HOME/.taskdeck/authority`, falling
/// back to `.taskdeck-authority` in the working directory when no home
/// directory is available.
#[must_use]
pub fn default_token_path() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if !home.trim().is_empty() => {
            Path::new(&home).join(".taskdeck").join("authority")
        }
        _ => PathBuf::from(".taskdeck-authority"),
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
