//! Cross-process single-instance locking
//!
//! One advisory lock file per product install directory mediates every
//! mutating operation across independently launched processes. Acquisition is
//! bounded: an attempt polls for at most the given timeout and then reports
//! failure instead of blocking, so the caller can put the retry decision in
//! front of a human.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use fslock::LockFile;

use crate::error::{AppstageError, Result};

/// Well-known lock filename inside the install directory
pub const LOCK_FILE: &str = ".lock";

/// Interval between polls while a bounded acquisition attempt is running
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Bounded, retriable ownership of the single-instance resource
pub trait InstanceLock {
    /// Attempt to take the lock, polling for at most `timeout`.
    ///
    /// Returns `Ok(false)` when the resource stayed contended for the whole
    /// window. A failed attempt leaves no state behind; calling again
    /// re-attempts fresh.
    fn try_acquire(&mut self, timeout: Duration) -> Result<bool>;

    /// Release the lock if held. Safe to call repeatedly.
    fn release(&mut self);
}

/// Advisory file lock keyed by the `.lock` file in the install directory
#[derive(Debug)]
pub struct FileLock {
    path: PathBuf,
    handle: Option<LockFile>,
}

impl FileLock {
    /// Lock handle for the install directory's well-known lock file.
    ///
    /// The directory must exist by the time `try_acquire` runs; the lock file
    /// itself is created on demand.
    pub fn in_dir(install_dir: &Path) -> Self {
        Self {
            path: install_dir.join(LOCK_FILE),
            handle: None,
        }
    }

    /// Whether this handle currently owns the lock
    #[allow(dead_code)]
    pub fn is_held(&self) -> bool {
        self.handle.is_some()
    }
}

impl InstanceLock for FileLock {
    fn try_acquire(&mut self, timeout: Duration) -> Result<bool> {
        if self.handle.is_some() {
            return Ok(true);
        }

        let mut lock = LockFile::open(&self.path).map_err(|e| AppstageError::LockFailed {
            reason: format!("{}: {}", self.path.display(), e),
        })?;

        let deadline = Instant::now() + timeout;
        loop {
            let acquired = lock.try_lock().map_err(|e| AppstageError::LockFailed {
                reason: format!("{}: {}", self.path.display(), e),
            })?;

            if acquired {
                self.handle = Some(lock);
                return Ok(true);
            }

            if Instant::now() >= deadline {
                return Ok(false);
            }

            thread::sleep(POLL_INTERVAL);
        }
    }

    fn release(&mut self) {
        // The lock file itself stays behind: unlinking it would race a
        // concurrent opener onto a different inode.
        if let Some(mut handle) = self.handle.take() {
            let _ = handle.unlock();
        }
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_acquire_free_lock() {
        let temp = TempDir::new().unwrap();
        let mut lock = FileLock::in_dir(temp.path());

        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
        assert!(lock.is_held());
    }

    #[test]
    fn test_acquire_is_idempotent_while_held() {
        let temp = TempDir::new().unwrap();
        let mut lock = FileLock::in_dir(temp.path());

        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
        assert!(lock.is_held());
    }

    #[test]
    fn test_release_is_repeatable() {
        let temp = TempDir::new().unwrap();
        let mut lock = FileLock::in_dir(temp.path());

        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
        lock.release();
        assert!(!lock.is_held());
        lock.release();
        assert!(!lock.is_held());
    }

    #[test]
    fn test_reacquire_after_release() {
        let temp = TempDir::new().unwrap();
        let mut lock = FileLock::in_dir(temp.path());

        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
        lock.release();
        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
    }

    #[test]
    fn test_acquire_in_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");
        let mut lock = FileLock::in_dir(&missing);

        let err = lock.try_acquire(Duration::from_millis(50)).unwrap_err();
        assert!(matches!(err, AppstageError::LockFailed { .. }));
    }

    #[test]
    fn test_lock_file_persists_after_release() {
        let temp = TempDir::new().unwrap();
        let mut lock = FileLock::in_dir(temp.path());

        assert!(lock.try_acquire(Duration::from_millis(100)).unwrap());
        lock.release();
        assert!(temp.path().join(LOCK_FILE).exists());
    }
}
