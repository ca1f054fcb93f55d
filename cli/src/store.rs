//! Session token persisted in the user's config directory.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use leads::TokenStore;

const TOKEN_FILE: &str = "token";

/// Default token location, e.g. `~/.config/leads-cli/token` on Linux.
pub fn default_token_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("com", "leads", "leads-cli")?;
    Some(proj.config_dir().join(TOKEN_FILE))
}

/// [`TokenStore`] over a single file.
///
/// The trait is infallible, so write failures are kept and surfaced through
/// [`FileTokenStore::take_error`] after the session call returns.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    error: Option<io::Error>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), error: None }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }
}

impl TokenStore for FileTokenStore {
    fn token(&self) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }

    fn store(&mut self, token: &str) {
        if let Err(e) = self.write(token) {
            self.error = Some(e);
        }
    }

    fn clear(&mut self) {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => self.error = Some(e),
            _ => {}
        }
    }
}
