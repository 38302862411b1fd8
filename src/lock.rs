// src/lock.rs
//
// Single-writer guard. Checkpoint plus output only make sense with one
// process advancing them; a second instance must fail fast, not
// interleave rows.
use std::fs::{File, OpenOptions};
use std::path::Path;

use fs2::FileExt;

use crate::error::RunError;

/// Advisory exclusive lock, held for the life of the value. Released by
/// the OS when the handle drops, crash included.
#[derive(Debug)]
pub struct InstanceLock {
    _file: File,
}

impl InstanceLock {
    pub fn acquire(path: &Path) -> Result<Self, RunError> {
        let file = OpenOptions::new().create(true).write(true).open(path)?;
        file.try_lock_exclusive()
            .map_err(|_| RunError::LockHeld(path.to_owned()))?;
        Ok(Self { _file: file })
    }
}

/* ---------- tests ---------- */
