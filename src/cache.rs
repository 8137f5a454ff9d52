use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, TesterError};

/// Name of the cache file, relative to the tester's working directory.
pub const CACHE_FILE_NAME: &str = ".cache";

/// The remembered project directory.
///
/// Loaded once at startup and written back only when a new directory is accepted.
#[derive(Debug, Clone)]
pub struct ProjectCache {
    path: PathBuf,
    entry: Option<PathBuf>,
}

impl ProjectCache {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            debug!(cache = %path.display(), "no cache file");
            return Ok(Self { path, entry: None });
        }
        let bytes = fs::read(&path).map_err(|source| TesterError::CacheRead {
            path: path.clone(),
            source,
        })?;
        let entry = parse_entry(bytes);
        debug!(cache = %path.display(), entry = %entry.display(), "loaded cache");
        Ok(Self {
            path,
            entry: Some(entry),
        })
    }

    pub fn entry(&self) -> Option<&Path> {
        self.entry.as_deref()
    }

    /// Drop the in-memory entry. The file on disk is left alone until the next `store`.
    pub fn forget(&mut self) {
        self.entry = None;
    }

    /// Overwrite the cache file with `dir`. Not atomic: a crash mid-write can leave it truncated.
    pub fn store(&mut self, dir: &Path) -> Result<()> {
        fs::write(&self.path, path_bytes(dir)).map_err(|source| TesterError::CacheWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!(cache = %self.path.display(), entry = %dir.display(), "stored cache");
        self.entry = Some(dir.to_path_buf());
        Ok(())
    }
}

fn parse_entry(mut bytes: Vec<u8>) -> PathBuf {
    while matches!(bytes.last(), Some(b'\r' | b'\n')) {
        bytes.pop();
    }
    path_from_bytes(bytes)
}

// Raw OS bytes on unix so non-UTF-8 directories survive a round trip
#[cfg(unix)]
fn path_bytes(dir: &Path) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    dir.as_os_str().as_bytes().to_vec()
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_bytes(dir: &Path) -> Vec<u8> {
    dir.to_string_lossy().into_owned().into_bytes()
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
