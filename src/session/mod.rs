//! # Session Marker Module
//!
//! The session marker is a plaintext file holding exactly the username of the
//! last logged-in user, stored at a fixed per-application path. Presence of
//! the file means "some user is logged in"; absence means "no session". It is
//! not an authenticated token.
//!
//! All operations return explicit `Result`s. The app shell decides what to do
//! with a failure; for `save` and `clear` it logs and continues, so a session
//! I/O problem never blocks login or logout.
//!
//! On Windows the file additionally gets the hidden attribute after writing,
//! best-effort with failures ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::shared::SessionError;

/// Result type for session file operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// The on-disk session marker.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Create a handle for the session file at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the session file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a login by overwriting the session file with the username.
    ///
    /// A prior file is removed first, after lifting any restrictive
    /// permissions left on it. The hidden attribute is applied afterwards on
    /// Windows.
    pub fn save(&self, username: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if self.path.exists() {
            lift_restrictive_permissions(&self.path);
            fs::remove_file(&self.path)?;
        }

        fs::write(&self.path, username)?;
        hide_file(&self.path);

        Ok(())
    }

    /// Read the logged-in username, if a session exists.
    ///
    /// Returns the trimmed file contents; a missing or empty file is
    /// `Ok(None)`. Other read failures propagate.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let username = contents.trim();
                if username.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(username.to_string()))
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove the session file. A missing file counts as success.
    pub fn clear(&self) -> Result<()> {
        lift_restrictive_permissions(&self.path);
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Make the file writable again so removal succeeds (mode 0o666 on Unix,
/// read-only flag off on Windows). Best-effort.
fn lift_restrictive_permissions(path: &Path) {
    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    let mut permissions = metadata.permissions();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(0o666);
    }
    #[cfg(windows)]
    permissions.set_readonly(false);
    let _ = fs::set_permissions(path, permissions);
}

/// Set the hidden attribute on Windows. Best-effort, failures ignored.
#[cfg(windows)]
fn hide_file(path: &Path) {
    let _ = std::process::Command::new("attrib")
        .arg("+h")
        .arg(path)
        .status();
}

#[cfg(not(windows))]
fn hide_file(_path: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn test_session() -> (TempDir, SessionFile) {
        let tmp = TempDir::new().unwrap();
        let session = SessionFile::new(tmp.path().join("credentials.txt"));
        (tmp, session)
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (_tmp, session) = test_session();

        session.save("alice").unwrap();
        assert_eq!(session.load().unwrap(), Some("alice".to_string()));
    }

    #[test]
    fn load_without_file_is_none() {
        let (_tmp, session) = test_session();

        assert_eq!(session.load().unwrap(), None);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let (_tmp, session) = test_session();

        session.save("alice").unwrap();
        session.save("bob").unwrap();
        assert_eq!(session.load().unwrap(), Some("bob".to_string()));
    }

    #[test]
    fn clear_removes_file() {
        let (_tmp, session) = test_session();

        session.save("alice").unwrap();
        session.clear().unwrap();
        assert!(!session.path().exists());
        assert_eq!(session.load().unwrap(), None);
    }

    #[test]
    fn clear_without_file_succeeds() {
        let (_tmp, session) = test_session();

        session.clear().unwrap();
    }

    #[test]
    fn load_trims_whitespace() {
        let (_tmp, session) = test_session();

        std::fs::write(session.path(), "alice\n").unwrap();
        assert_eq!(session.load().unwrap(), Some("alice".to_string()));
    }

    #[test]
    fn load_treats_empty_file_as_no_session() {
        let (_tmp, session) = test_session();

        std::fs::write(session.path(), "  \n").unwrap();
        assert_eq!(session.load().unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn save_replaces_read_only_file() {
        use std::os::unix::fs::PermissionsExt;

        let (_tmp, session) = test_session();
        session.save("alice").unwrap();

        let mut perms = fs::metadata(session.path()).unwrap().permissions();
        perms.set_mode(0o444);
        fs::set_permissions(session.path(), perms).unwrap();

        session.save("bob").unwrap();
        assert_eq!(session.load().unwrap(), Some("bob".to_string()));
    }
}
