//! Single-instance lock for `softwared dev`.
//!
//! The lock is a file created with `create_new`, so two dev servers can't
//! both hold it. It records the owning pid and is removed when the guard
//! drops. A crashed run leaves it behind; `--clean` clears it.

#[cfg(test)]
#[path = "dev_lock_test.rs"]
mod dev_lock_test;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug)]
pub struct DevLock {
    path: PathBuf,
}

impl DevLock {
    /// Take the lock at `path`, first removing a stale one when `clean` is set.
    ///
    /// # Errors
    ///
    /// [`AppError::DevLockHeld`] when another run holds the lock, or
    /// [`AppError::Io`] when the lock file can't be created.
    pub fn acquire(path: &Path, clean: bool) -> Result<Self, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(AppError::io("creating", parent))?;
        }
        if clean {
            remove_stale(path);
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                let pid = fs::read_to_string(path).unwrap_or_default().trim().to_owned();
                return Err(AppError::DevLockHeld { path: path.to_owned(), pid });
            }
            Err(err) => return Err(AppError::io("creating", path)(err)),
        };
        writeln!(file, "{}", std::process::id()).map_err(AppError::io("writing", path))?;

        tracing::debug!(path = %path.display(), "dev lock acquired");
        Ok(Self { path: path.to_owned() })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DevLock {
    fn drop(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "dev lock released"),
            Err(err) => tracing::warn!(path = %self.path.display(), error = %err, "could not remove dev lock"),
        }
    }
}

/// Best-effort removal; failure is logged and acquisition proceeds.
fn remove_stale(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::info!(path = %path.display(), "removed stale dev lock"),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => tracing::warn!(path = %path.display(), error = %err, "could not remove dev lock"),
    }
}
