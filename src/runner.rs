// src/runner.rs
//
// The ingestion driver: discover tables, resume from the checkpoint,
// then fetch, score, append and commit one table at a time. A table
// failure is logged and skipped; the run itself only stops on setup or
// durability problems.
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::checkpoint::CheckpointStore;
use crate::config::consts::REQUEST_PAUSE_MS;
use crate::config::options::RunOptions;
use crate::error::{RunError, TableError};
use crate::extract;
use crate::net::Backend;
use crate::nomenclator::{self, Table};
use crate::output::{OutputRow, OutputWriter};
use crate::progress::Progress;
use crate::score;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_tables: usize,
    /// Checkpoint found at startup, if any.
    pub resumed_from: Option<usize>,
    pub processed: usize,
    pub skipped: usize,
    /// True when the checkpoint now covers the whole listing.
    pub completed: bool,
}

pub fn run(
    opts: &RunOptions,
    backend: &dyn Backend,
    store: &mut dyn CheckpointStore,
    progress: &mut dyn Progress,
) -> Result<RunSummary, RunError> {
    let raw = nomenclator::load_raw(&opts.nomenclator, backend)?;
    let tables = nomenclator::discover(&raw)?;
    let total = tables.len();

    let resumed_from = store.read()?;
    if let Some(done) = resumed_from {
        if done + 1 >= total {
            if done + 1 > total {
                warn!(checkpoint = done, total, "checkpoint beyond listing");
            }
            info!("all tables already processed");
            progress.log("All tables already processed.");
            return Ok(RunSummary {
                total_tables: total,
                resumed_from,
                processed: 0,
                skipped: 0,
                completed: true,
            });
        }
    }

    let start = resumed_from.map_or(0, |done| done + 1);
    let end = opts.limit.map_or(total, |n| start.saturating_add(n).min(total));

    if opts.dry_run {
        info!(total, start, end, "dry run, stopping before any fetch");
        progress.log(&format!(
            "{total} tables; next index {start}; would attempt {}",
            end - start
        ));
        return Ok(RunSummary {
            total_tables: total,
            resumed_from,
            processed: 0,
            skipped: 0,
            completed: false,
        });
    }

    // Header goes in only when this output has never committed a row.
    let mut writer = OutputWriter::open(&opts.out, resumed_from.is_none())?;

    info!(total, start, end, out = %opts.out.display(), "run starting");
    progress.begin(end - start);

    let mut last_committed = resumed_from;
    let mut processed = 0;
    let mut skipped = 0;

    for table in &tables[start..end] {
        match process_table(backend, table) {
            Ok(row) => {
                // Row durable first, then the marker may move.
                writer.append(&row)?;
                store.write(table.index)?;
                last_committed = Some(table.index);
                processed += 1;
                progress.table_done(table.index, &table.code);
            }
            Err(err) => {
                warn!(index = table.index, code = %table.code, %err, "table skipped");
                skipped += 1;
                progress.table_skipped(table.index, &table.code, &err.to_string());
            }
        }
        if table.index + 1 < end {
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS));
        }
    }

    let completed = last_committed == Some(total - 1);
    info!(processed, skipped, completed, "run finished");
    progress.finish(processed, skipped);

    Ok(RunSummary {
        total_tables: total,
        resumed_from,
        processed,
        skipped,
        completed,
    })
}

/// Fetch, extract and score one table. Any failure here is scoped to
/// the table and leaves both checkpoint and output untouched.
fn process_table(backend: &dyn Backend, table: &Table) -> Result<OutputRow, TableError> {
    debug!(index = table.index, code = %table.code, "fetching");
    let data = backend.scope_data(&table.code)?;
    let location = extract::location_of(&data);
    let votes = extract::votes_of(&data);
    let score = score::score_votes(&votes)?;
    Ok(OutputRow::build(&table.code, &location, &votes, &score))
}
