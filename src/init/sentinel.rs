//! File-existence-backed sentinel flags.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EntrypointError;

/// A persisted marker that makes an action run at most once across
/// restarts.
///
/// Backed by file existence on the persistent volume. Monotonic by
/// construction: there is no way to unset a sentinel from this process.
#[derive(Debug, Clone)]
pub struct Sentinel {
    path: PathBuf,
}

impl Sentinel {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn is_set(&self) -> bool {
        self.path.exists()
    }

    pub fn set(&self) -> Result<(), EntrypointError> {
        fs::write(&self.path, b"").map_err(|source| EntrypointError::WriteFile {
            path: self.path.clone(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_check() {
        let dir = TempDir::new().unwrap();
        let flag = Sentinel::new(dir.path().join(".init_done"));

        assert!(!flag.is_set());
        flag.set().unwrap();
        assert!(flag.is_set());

        // Setting again is harmless.
        flag.set().unwrap();
        assert!(flag.is_set());
    }
}
