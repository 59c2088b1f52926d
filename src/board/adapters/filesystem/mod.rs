//! Directory-backed key-value store.
//!
//! Each key is stored as `<key>.json` inside one capability-scoped directory.
//! Writes go to a sibling temporary file that is then renamed over the
//! target, so a crash mid-write leaves the previous value intact.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::board::ports::{KeyValueStore, StorageError, StorageResult};

const ENTRY_SUFFIX: &str = ".json";
const TEMP_SUFFIX: &str = ".json.tmp";

/// Key-value store persisting entries as files in a directory.
#[derive(Debug)]
pub struct DirKeyValueStore {
    dir: Dir,
}

impl DirKeyValueStore {
    /// Opens (creating if needed) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        std::fs::create_dir_all(path).map_err(|err| unavailable(path, &err))?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| unavailable(path, &err))?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn unavailable(path: &Utf8Path, err: &io::Error) -> StorageError {
    StorageError::Unavailable(format!("{path}: {err}"))
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> StorageResult<()> {
    let is_valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
    if is_valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

impl KeyValueStore for DirKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match self.dir.read_to_string(format!("{key}{ENTRY_SUFFIX}")) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        validate_key(key)?;
        let temp = format!("{key}{TEMP_SUFFIX}");
        self.dir
            .write(&temp, value)
            .map_err(StorageError::backend)?;
        self.dir
            .rename(&temp, &self.dir, format!("{key}{ENTRY_SUFFIX}"))
            .map_err(StorageError::backend)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        match self.dir.remove_file(format!("{key}{ENTRY_SUFFIX}")) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::backend(err)),
        }
    }
}
