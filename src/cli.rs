// src/cli.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs};

use color_eyre::eyre::{Result, bail};
use tracing::info;

use crate::checkpoint::{self, FileCheckpoint};
use crate::config::options::RunOptions;
use crate::lock::InstanceLock;
use crate::net::HttpBackend;
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<()> {
    let mut opts = RunOptions::default();
    parse_cli(env::args().skip(1), &mut opts)?;

    // Dry runs read, never write; no lock needed and no cleanup allowed.
    let _lock = if opts.dry_run {
        None
    } else {
        Some(InstanceLock::acquire(&opts.lock_path())?)
    };

    if opts.from_start && !opts.dry_run {
        info!("restart requested, dropping checkpoint and output");
        checkpoint::clear(&opts.checkpoint)?;
        remove_if_exists(&opts.out)?;
    }

    let backend = HttpBackend::new()?;
    let mut store = FileCheckpoint::new(&opts.checkpoint);
    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, &backend, &mut store, &mut progress)?;

    if summary.completed {
        println!("Output complete: {} tables.", summary.total_tables);
    } else if !opts.dry_run {
        println!("Run ended before the last table; rerun to continue.");
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub fn parse_cli(
    mut args: impl Iterator<Item = String>,
    opts: &mut RunOptions,
) -> Result<()> {
    while let Some(a) = args.next() {
        match a.as_str() {
            "--nomenclator" => match args.next() {
                Some(v) => opts.nomenclator = PathBuf::from(v),
                None => bail!("Missing value for --nomenclator"),
            },
            "-o" | "--out" => match args.next() {
                Some(v) => opts.out = PathBuf::from(v),
                None => bail!("Missing output path"),
            },
            "--checkpoint" => match args.next() {
                Some(v) => opts.checkpoint = PathBuf::from(v),
                None => bail!("Missing value for --checkpoint"),
            },
            "--limit" => {
                let v = match args.next() {
                    Some(v) => v,
                    None => bail!("Missing value for --limit"),
                };
                match v.parse() {
                    Ok(n) => opts.limit = Some(n),
                    Err(_) => bail!("Bad --limit: {}", v),
                }
            }
            "--from-start" => opts.from_start = true,
            "--dry-run" => opts.dry_run = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }
    Ok(())
}

/// Prints one line per committed table; skip details go to the log.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("{total} tables to process");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn table_done(&mut self, _index: usize, code: &str) {
        self.done += 1;
        println!("{code} ok ({}/{})", self.done, self.total);
    }

    fn table_skipped(&mut self, _index: usize, code: &str, reason: &str) {
        eprintln!("{code} skipped: {reason}");
    }

    fn finish(&mut self, processed: usize, skipped: usize) {
        println!("Done. {processed} written, {skipped} skipped.");
    }
}
