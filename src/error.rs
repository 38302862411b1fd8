// src/error.rs
//
// Two-tier error taxonomy. RunError aborts the process; TableError is
// scoped to a single table, which gets logged and skipped while the run
// carries on.
use std::path::PathBuf;

use thiserror::Error;

use crate::score::ScoreError;

/// Transport-level failure: connect, timeout, non-success status.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct FetchError(pub String);

/// Fatal for the whole run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Nomenclator missing, malformed, or empty of tables.
    #[error("discovery failed: {0}")]
    Discovery(String),

    /// Checkpoint file exists but does not hold a table index.
    #[error("checkpoint {path:?} is corrupt: {reason}")]
    CheckpointCorrupt { path: PathBuf, reason: String },

    /// Another process holds the lock for this checkpoint/output pair.
    #[error("already running: lock held on {0:?}")]
    LockHeld(PathBuf),

    #[error("output write failed: {0}")]
    Output(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Scoped to one table. Never stops the run.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("bad payload: {0}")]
    Extraction(String),

    #[error("scoring: {0}")]
    Scoring(#[from] ScoreError),
}
