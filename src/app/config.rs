use std::path::{Path, PathBuf};

use crate::app::branding::Branding;
use crate::session::SessionFile;

/// File name of the credential database inside the app data directory
const DB_FILE_NAME: &str = "database.db";

/// File name of the session marker inside the app data directory
const SESSION_FILE_NAME: &str = "credentials.txt";

/// Resolved filesystem locations for one application.
///
/// Everything lives under one per-application data directory: the OS data
/// directory (falling back to the temp directory) plus the branding's
/// subdirectory name.
#[derive(Debug, Clone)]
pub struct Config {
    data_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory for the given application.
    pub fn new(branding: &Branding) -> Self {
        let mut data_dir = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        data_dir.push(branding.data_dir_name);
        Self { data_dir }
    }

    /// Use an explicit data directory instead of the OS default.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The per-application data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the credential database.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    /// Handle for the session marker file.
    pub fn session_file(&self) -> SessionFile {
        SessionFile::new(self.data_dir.join(SESSION_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::branding;

    #[test]
    fn test_paths_live_under_data_dir() {
        let config = Config::with_data_dir("/tmp/finprep-test");
        assert_eq!(config.db_path(), Path::new("/tmp/finprep-test/database.db"));
        assert_eq!(
            config.session_file().path(),
            Path::new("/tmp/finprep-test/credentials.txt")
        );
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        let config = Config::new(&branding::personal_finance());
        assert!(config.data_dir().ends_with("PersonalFinance"));
    }
}
