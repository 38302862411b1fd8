// src/scope.rs
//
// Wire model for the per-table scope payload. Only the fields the pipeline
// consumes are declared; everything else in the payload is ignored.
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct ScopeData {
    /// Ancestor chain of the scope, one entry per administrative level.
    #[serde(default)]
    pub fathers: Vec<Father>,
    #[serde(default)]
    pub partidos: Vec<Partido>,
    #[serde(default)]
    pub nulos: u64,
    #[serde(default)]
    pub abstencion: u64,
    #[serde(default)]
    pub afirmativos: u64,
    #[serde(default)]
    pub blancos: u64,
    #[serde(default)]
    pub impugnados: u64,
    #[serde(default, rename = "totalVotos")]
    pub total_votos: u64,
    #[serde(default)]
    pub census: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Father {
    /// Arrives as a JSON number or a numeric string, depending on level.
    #[serde(deserialize_with = "level_from_any")]
    pub level: u8,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub codigo: String,
}

/// Per-party vote line. All three fields are required; a line missing any
/// of them fails the whole payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Partido {
    pub code: String,
    pub name: String,
    pub votos: u64,
}

fn level_from_any<'de, D>(d: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }
    match Raw::deserialize(d)? {
        Raw::Num(n) => u8::try_from(n).map_err(serde::de::Error::custom),
        Raw::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/* ---------- tests ---------- */
