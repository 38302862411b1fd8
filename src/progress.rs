// src/progress.rs
/// Lightweight progress reporting for long ingestion runs. Frontends
/// implement this to surface status to users.
pub trait Progress {
    /// Called once after resume is decided, with the number of tables
    /// this run will attempt.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One table committed: row durable, checkpoint advanced.
    fn table_done(&mut self, _index: usize, _code: &str) {}

    /// One table skipped, with the cause.
    fn table_skipped(&mut self, _index: usize, _code: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _processed: usize, _skipped: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
