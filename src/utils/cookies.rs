//! Cookie file materialization
//!
//! yt-dlp only accepts credentials as a Netscape cookie file, so the raw file
//! contents configured through the environment are written to disk and the
//! resulting path is passed to the provider.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default environment variable carrying the cookie file contents
pub const COOKIES_ENV: &str = "YOUTUBE_COOKIES";

#[derive(Debug, Clone)]
pub struct CookieFile {
    path: PathBuf,
    env_var: String,
}

impl CookieFile {
    pub fn new(path: impl Into<PathBuf>, env_var: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            env_var: env_var.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contents` verbatim, or remove a stale file when `None`.
    ///
    /// Returns the path when a cookie file exists afterwards.
    pub fn write(&self, contents: Option<&str>) -> io::Result<Option<PathBuf>> {
        match contents {
            Some(contents) => {
                std::fs::write(&self.path, contents)?;
                info!("Cookies file written to {}", self.path.display());
                Ok(Some(self.path.clone()))
            }
            None => {
                match std::fs::remove_file(&self.path) {
                    Ok(()) => info!(
                        "Cookies file {} removed as {} is not set",
                        self.path.display(),
                        self.env_var
                    ),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        debug!("No cookies configured and no cookies file present");
                    }
                    Err(e) => return Err(e),
                }
                Ok(None)
            }
        }
    }

    /// Re-read the environment variable and bring the file in line with it.
    /// An empty value counts as unset.
    pub fn sync_from_env(&self) -> io::Result<Option<PathBuf>> {
        let contents = std::env::var(&self.env_var)
            .ok()
            .filter(|value| !value.is_empty());
        self.write(contents.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_exact_contents() {
        let temp = TempDir::new().unwrap();
        let cookies = CookieFile::new(temp.path().join("cookies.txt"), COOKIES_ENV);

        let path = cookies.write(Some("A=B")).unwrap();
        assert_eq!(path.as_deref(), Some(cookies.path()));
        assert_eq!(std::fs::read_to_string(cookies.path()).unwrap(), "A=B");

        cookies.write(Some("C=D")).unwrap();
        assert_eq!(std::fs::read_to_string(cookies.path()).unwrap(), "C=D");
    }

    #[test]
    fn removal_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let cookies = CookieFile::new(temp.path().join("cookies.txt"), COOKIES_ENV);

        cookies.write(Some("A=B")).unwrap();
        assert_eq!(cookies.write(None).unwrap(), None);
        assert!(!cookies.path().exists());

        assert_eq!(cookies.write(None).unwrap(), None);
        assert_eq!(cookies.write(None).unwrap(), None);
    }

    #[test]
    fn syncs_with_environment() {
        // Unique variable name so parallel tests never observe it
        let var = "TUBEINFO_TEST_COOKIES_SYNC";
        let temp = TempDir::new().unwrap();
        let cookies = CookieFile::new(temp.path().join("cookies.txt"), var);

        std::env::remove_var(var);
        assert_eq!(cookies.sync_from_env().unwrap(), None);
        assert_eq!(cookies.sync_from_env().unwrap(), None);
        assert!(!cookies.path().exists());

        std::env::set_var(var, "A=B");
        assert!(cookies.sync_from_env().unwrap().is_some());
        assert_eq!(std::fs::read_to_string(cookies.path()).unwrap(), "A=B");

        std::env::set_var(var, "");
        assert_eq!(cookies.sync_from_env().unwrap(), None);
        assert!(!cookies.path().exists());

        std::env::set_var(var, "A=B");
        cookies.sync_from_env().unwrap();
        std::env::remove_var(var);
        cookies.sync_from_env().unwrap();
        assert!(!cookies.path().exists());
    }

    #[test]
    fn unwritable_location_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cookies = CookieFile::new(temp.path().join("missing/dir/cookies.txt"), COOKIES_ENV);
        assert!(cookies.write(Some("A=B")).is_err());
    }
}
