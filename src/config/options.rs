// src/config/options.rs
use std::ffi::OsString;
use std::path::PathBuf;
use super::consts::*;

/// Everything a run needs to know, CLI-settable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Cached nomenclator document. Fetched once if the file is missing.
    pub nomenclator: PathBuf,
    /// Output dataset, appended row by row.
    pub out: PathBuf,
    /// Resume marker: index of the last table fully committed.
    pub checkpoint: PathBuf,
    /// Process at most this many tables, then stop cleanly.
    pub limit: Option<usize>,
    /// Drop checkpoint and output before running.
    pub from_start: bool,
    /// Discovery and resume report only. No table fetches, no output or
    /// checkpoint writes.
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            nomenclator: PathBuf::from(DEFAULT_NOMENCLATOR_FILE),
            out: PathBuf::from(DEFAULT_OUTPUT_FILE),
            checkpoint: PathBuf::from(DEFAULT_CHECKPOINT_FILE),
            limit: None,
            from_start: false,
            dry_run: false,
        }
    }
}

impl RunOptions {
    /// Lock file guarding this checkpoint/output pair: `<out>.lock`.
    pub fn lock_path(&self) -> PathBuf {
        let mut p: OsString = self.out.clone().into_os_string();
        p.push(".lock");
        PathBuf::from(p)
    }
}
