//! Scratch-directory lifecycle for the hosting process.
//!
//! The compressor itself never touches the filesystem; any temporary
//! artifacts belong to the host (staged uploads, prepared downloads). The
//! host calls [`ScratchDir::purge`] once at startup so those artifacts do
//! not accumulate across restarts.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Directory name used under the system temp dir by default.
const DEFAULT_DIR_NAME: &str = "shrinkray_scratch";

/// A scratch directory owned by the hosting process.
#[derive(Debug, Clone)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Use an explicit directory path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default location under the platform temp directory.
    pub fn default_location() -> Self {
        Self::new(env::temp_dir().join(DEFAULT_DIR_NAME))
    }

    /// The directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure(&self) -> io::Result<()> {
        fs::create_dir_all(&self.path)
    }

    /// Remove all regular files directly inside the directory, returning
    /// how many were removed. A missing directory counts as already clean.
    /// Files that vanish mid-walk are skipped, not errors.
    pub fn purge(&self) -> io::Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && fs::remove_file(&path).is_ok() {
                removed += 1;
            }
        }

        debug!("purged {} file(s) from {}", removed, self.path.display());
        Ok(removed)
    }
}
