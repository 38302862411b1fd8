// src/checkpoint.rs
//
// Resume marker. The stored index is the last table whose row is known to
// be durable in the output; everything after it is unprocessed.
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::RunError;

pub trait CheckpointStore {
    /// `None` means never ran (missing file, or the -1 sentinel).
    fn read(&self) -> Result<Option<usize>, RunError>;
    fn write(&mut self, index: usize) -> Result<(), RunError>;
}

/// One small text file holding a decimal index. Writes go through a temp
/// file and a rename so a crash never leaves a half-written marker.
pub struct FileCheckpoint {
    path: PathBuf,
}

impl FileCheckpoint {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn corrupt(&self, reason: impl Into<String>) -> RunError {
        RunError::CheckpointCorrupt {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl CheckpointStore for FileCheckpoint {
    fn read(&self) -> Result<Option<usize>, RunError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let n: i64 = content
            .trim()
            .parse()
            .map_err(|_| self.corrupt(format!("not an index: {:?}", content.trim())))?;
        match n {
            -1 => Ok(None),
            i if i < 0 => Err(self.corrupt(format!("negative index {i}"))),
            i => usize::try_from(i)
                .map(Some)
                .map_err(|_| self.corrupt(format!("index {i} out of range"))),
        }
    }

    fn write(&mut self, index: usize) -> Result<(), RunError> {
        let tmp = self.path.with_extension("tmp");
        let mut f = File::create(&tmp)?;
        write!(f, "{index}")?;
        f.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryCheckpoint {
    value: Option<usize>,
}

impl MemoryCheckpoint {
    pub fn new(value: Option<usize>) -> Self {
        Self { value }
    }
}

impl CheckpointStore for MemoryCheckpoint {
    fn read(&self) -> Result<Option<usize>, RunError> {
        Ok(self.value)
    }

    fn write(&mut self, index: usize) -> Result<(), RunError> {
        self.value = Some(index);
        Ok(())
    }
}

/// Remove the marker entirely, for full restarts.
pub fn clear(path: &Path) -> Result<(), RunError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/* ---------- tests ---------- */
