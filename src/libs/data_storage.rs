use crate::libs::directory::ensure_directory;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_warning;
use std::env::var_os;
use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = ".orgnice";

/// The application root directory.
///
/// Built once by the caller and passed to whatever needs a path beneath it,
/// so there is no process-wide mutable root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Resolves `$HOME/.orgnice` (`%USERPROFILE%` on Windows).
    ///
    /// Falls back to `./.orgnice` when neither variable is set.
    pub fn new() -> Self {
        let home = var_os("HOME").or_else(|| var_os("USERPROFILE")).map(PathBuf::from).unwrap_or_else(|| {
            msg_warning!(Message::HomeDirUnresolved);
            PathBuf::from(".")
        });

        Self::from_path(home.join(APP_DIR_NAME))
    }

    pub fn from_path(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Creates the root directory or repairs its owner permissions.
    pub fn init(&self) -> Result<()> {
        ensure_directory(&self.base_path)
    }

    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
