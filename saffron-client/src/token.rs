//! Token persistence
//!
//! The website keeps its auth token in a secure cookie; this client keeps it
//! in a small file with restrictive permissions so CLI/desktop frontends
//! survive restarts without re-authenticating.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// On-disk token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, creating parent directories as needed
    pub fn store(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Load the stored token, if any
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
            _ => None,
        }
    }

    /// Remove the stored token
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("auth/token"));

        assert!(store.load().is_none());

        store.store("jwt-token-value").unwrap();
        assert_eq!(store.load().as_deref(), Some("jwt-token-value"));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token"));
        store.store("secret").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
