//! Directory-backed storage: one `<key>.json` file per key.

use super::Storage;
use crate::error::{Result, StorefrontError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each key as a file inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Directory holding the key files.
    pub dir: PathBuf,
}

impl FileStorage {
    /// Open storage rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the file holding `key`.
    ///
    /// Keys become file names, so only ASCII letters, digits, `-` and `_`
    /// are accepted.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorefrontError::InvalidArgument(format!(
                "storage key {:?} is not usable as a file name",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes to a temp file first and renames on success, so an
    /// interrupted write never leaves a half-written value behind.
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        let result = (|| -> Result<()> {
            fs::write(&tmp_path, value)?;
            fs::rename(&tmp_path, &path)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }

        result
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.dir.display())
    }
}
