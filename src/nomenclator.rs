// src/nomenclator.rs
//
// Table discovery. The nomenclator lists every administrative scope in
// the election; the pollable tables are the level-8 entries whose code
// carries the mesa suffix. Discovery order is document order and fixes
// the index space the checkpoint refers to.
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::config::consts::{TABLE_CODE_SUFFIX, TABLE_LEVEL};
use crate::error::RunError;
use crate::net::Backend;

/// One pollable table. `index` is the position within the filtered,
/// document-ordered listing; the checkpoint stores these indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub index: usize,
    pub code: String,
}

#[derive(Deserialize)]
struct Nomenclator {
    #[serde(default)]
    amb: Vec<AmbitoGroup>,
}

#[derive(Deserialize)]
struct AmbitoGroup {
    #[serde(default)]
    ambitos: Vec<Ambito>,
}

#[derive(Deserialize)]
struct Ambito {
    #[serde(default)]
    l: u64,
    #[serde(default)]
    co: String,
}

/// Read the cached document, fetching and caching it on first use. The
/// cache keeps reruns off the network and pins the index space for the
/// life of an output file. The write goes through a temp file and a
/// rename so a crash cannot leave a torn cache.
pub fn load_raw(path: &Path, backend: &dyn Backend) -> Result<String, RunError> {
    if path.exists() {
        info!(path = %path.display(), "nomenclator cache hit");
        return Ok(fs::read_to_string(path)?);
    }
    info!(path = %path.display(), "nomenclator cache miss, fetching");
    let raw = backend
        .nomenclator_json()
        .map_err(|e| RunError::Discovery(e.to_string()))?;
    let tmp = path.with_extension("tmp");
    let mut f = File::create(&tmp)?;
    f.write_all(raw.as_bytes())?;
    f.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(raw)
}

/// Parse and filter the document into the table listing.
pub fn discover(raw: &str) -> Result<Vec<Table>, RunError> {
    let doc: Nomenclator =
        serde_json::from_str(raw).map_err(|e| RunError::Discovery(e.to_string()))?;

    let mut tables = Vec::new();
    for group in &doc.amb {
        for ambito in &group.ambitos {
            if ambito.l == TABLE_LEVEL && ambito.co.ends_with(TABLE_CODE_SUFFIX) {
                tables.push(Table {
                    index: tables.len(),
                    code: ambito.co.clone(),
                });
            }
        }
    }

    if tables.is_empty() {
        return Err(RunError::Discovery("no pollable tables in nomenclator".into()));
    }
    info!(count = tables.len(), "tables identified");
    Ok(tables)
}

/* ---------- tests ---------- */
