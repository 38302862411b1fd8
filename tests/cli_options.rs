// tests/cli_options.rs
//
// Flag parsing and derived paths.
use std::path::PathBuf;

use mesa_scrape::cli::parse_cli;
use mesa_scrape::config::options::RunOptions;

fn parse(args: &[&str]) -> Result<RunOptions, String> {
    let mut opts = RunOptions::default();
    parse_cli(args.iter().map(|s| s.to_string()), &mut opts)
        .map(|_| opts)
        .map_err(|e| e.to_string())
}

#[test]
fn defaults_are_the_conventional_file_layout() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts.nomenclator, PathBuf::from("raw_table_data.json"));
    assert_eq!(opts.out, PathBuf::from("output.csv"));
    assert_eq!(opts.checkpoint, PathBuf::from("last_processed_table.txt"));
    assert_eq!(opts.limit, None);
    assert!(!opts.from_start);
    assert!(!opts.dry_run);
}

#[test]
fn every_flag_overrides_its_default() {
    let opts = parse(&[
        "--nomenclator",
        "n.json",
        "-o",
        "data/out.csv",
        "--checkpoint",
        "cp.txt",
        "--limit",
        "10",
        "--from-start",
        "--dry-run",
    ])
    .unwrap();
    assert_eq!(opts.nomenclator, PathBuf::from("n.json"));
    assert_eq!(opts.out, PathBuf::from("data/out.csv"));
    assert_eq!(opts.checkpoint, PathBuf::from("cp.txt"));
    assert_eq!(opts.limit, Some(10));
    assert!(opts.from_start);
    assert!(opts.dry_run);
}

#[test]
fn out_accepts_the_long_form() {
    let opts = parse(&["--out", "elsewhere.csv"]).unwrap();
    assert_eq!(opts.out, PathBuf::from("elsewhere.csv"));
}

#[test]
fn missing_values_are_rejected() {
    assert!(parse(&["--limit"]).unwrap_err().contains("Missing value"));
    assert!(parse(&["-o"]).unwrap_err().contains("Missing output path"));
    assert!(
        parse(&["--nomenclator"])
            .unwrap_err()
            .contains("Missing value")
    );
}

#[test]
fn non_numeric_limit_is_rejected() {
    assert!(parse(&["--limit", "many"]).unwrap_err().contains("Bad --limit"));
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(parse(&["--frobnicate"]).unwrap_err().contains("Unknown arg"));
}

#[test]
fn lock_path_sits_next_to_the_output() {
    let opts = parse(&["-o", "data/out.csv"]).unwrap();
    assert_eq!(opts.lock_path(), PathBuf::from("data/out.csv.lock"));
}
