// src/output.rs
//
// The output dataset: one CSV row per committed table, fixed column set.
// Appends are flushed and synced before the caller may advance the
// checkpoint, so a row is durable by the time it counts as done.
use std::fs::OpenOptions;
use std::path::Path;

use crate::config::consts::TRACKED_PARTIES;
use crate::error::RunError;
use crate::extract::{Location, Named, VoteSummary};
use crate::score::{AnomalyScore, Recommendation};

/// Column names, in row order. Tracked parties get a count column and a
/// share column apiece.
pub fn header() -> Vec<String> {
    let mut h: Vec<String> = [
        "numero_mesa",
        "Local_de_Comicio",
        "Comuna_Municipio",
        "Seccion",
        "Circuito",
        "Distrito",
        "Pais",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for (_, name) in TRACKED_PARTIES {
        h.push((*name).to_string());
        h.push(format!("{name} - %"));
    }
    h.extend(
        [
            "nulos",
            "abstencion",
            "afirmativos",
            "blancos",
            "impugnados",
            "votos_totales",
            "census",
            "Chi Squared",
            "P Value",
            "Ganador",
            "Recommendation",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    h
}

#[derive(Debug, Clone)]
pub struct OutputRow {
    pub numero_mesa: String,
    pub location: Location,
    /// One slot per tracked party: count and share of afirmativos.
    pub tracked: Vec<Option<(u64, f64)>>,
    pub nulos: u64,
    pub abstencion: u64,
    pub afirmativos: u64,
    pub blancos: u64,
    pub impugnados: u64,
    pub votos_totales: u64,
    pub census: u64,
    pub chi_squared: f64,
    pub p_value: f64,
    pub ganador: String,
    pub recommendation: Recommendation,
}

impl OutputRow {
    pub fn build(
        code: &str,
        location: &Location,
        votes: &VoteSummary,
        score: &AnomalyScore,
    ) -> Self {
        let tracked = TRACKED_PARTIES
            .iter()
            .map(|(party_code, _)| {
                votes
                    .votes_per_party
                    .iter()
                    .find(|p| p.code == *party_code)
                    .map(|p| (p.votes, share_of(p.votes, votes.afirmativos)))
            })
            .collect();

        Self {
            numero_mesa: code.to_string(),
            location: location.clone(),
            tracked,
            nulos: votes.nulos,
            abstencion: votes.abstencion,
            afirmativos: votes.afirmativos,
            blancos: votes.blancos,
            impugnados: votes.impugnados,
            votos_totales: votes.votos_totales,
            census: votes.census,
            chi_squared: score.chi_squared,
            p_value: score.p_value,
            ganador: votes.winner().map(|p| p.name.clone()).unwrap_or_default(),
            recommendation: score.recommendation,
        }
    }

    pub fn to_record(&self) -> Vec<String> {
        let mut r = vec![self.numero_mesa.clone()];
        r.push(name_cell(&self.location.local_de_comicio));
        r.push(name_cell(&self.location.comuna_municipio));
        r.push(name_cell(&self.location.seccion));
        r.push(name_cell(&self.location.circuito));
        r.push(name_cell(&self.location.distrito));
        r.push(name_cell(&self.location.pais));
        for slot in &self.tracked {
            match slot {
                Some((count, share)) => {
                    r.push(count.to_string());
                    r.push(format!("{share:.4}"));
                }
                None => {
                    r.push(String::new());
                    r.push(String::new());
                }
            }
        }
        for agg in [
            self.nulos,
            self.abstencion,
            self.afirmativos,
            self.blancos,
            self.impugnados,
            self.votos_totales,
            self.census,
        ] {
            r.push(agg.to_string());
        }
        r.push(fmt_float(self.chi_squared));
        r.push(fmt_float(self.p_value));
        r.push(self.ganador.clone());
        r.push(self.recommendation.as_str().to_string());
        r
    }
}

fn share_of(votes: u64, afirmativos: u64) -> f64 {
    if afirmativos == 0 {
        0.0
    } else {
        votes as f64 / afirmativos as f64
    }
}

fn name_cell(slot: &Option<Named>) -> String {
    slot.as_ref().map(|n| n.name.clone()).unwrap_or_default()
}

/// Plain decimal for ordinary magnitudes, exponent form for the very
/// small p-values the scorer produces.
fn fmt_float(v: f64) -> String {
    if v != 0.0 && v.abs() < 1e-4 {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}

/// Append-mode CSV writer over the output dataset.
pub struct OutputWriter {
    w: csv::Writer<std::fs::File>,
}

impl OutputWriter {
    /// Open for appending. The header goes in only on a fresh run; the
    /// caller decides based on the checkpoint.
    pub fn open(path: &Path, write_header: bool) -> Result<Self, RunError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut w = csv::WriterBuilder::new().from_writer(file);
        if write_header {
            w.write_record(header())?;
        }
        Ok(Self { w })
    }

    /// Write one row and make it durable.
    pub fn append(&mut self, row: &OutputRow) -> Result<(), RunError> {
        self.w.write_record(row.to_record())?;
        self.w.flush().map_err(RunError::Io)?;
        self.w.get_ref().sync_data()?;
        Ok(())
    }
}

/* ---------- tests ---------- */
