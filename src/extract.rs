// src/extract.rs
//
// Pure payload transforms: ancestor chain to a named location, vote lines
// to a summary. No I/O here.
use crate::scope::ScopeData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named {
    pub name: String,
    pub code: String,
}

/// Administrative placement of one table. Levels the payload does not
/// mention stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub pais: Option<Named>,
    pub distrito: Option<Named>,
    pub seccion: Option<Named>,
    pub comuna_municipio: Option<Named>,
    pub circuito: Option<Named>,
    pub local_de_comicio: Option<Named>,
    pub numero_de_mesa: Option<Named>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyVote {
    pub code: String,
    pub name: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteSummary {
    /// Payload order, preserved.
    pub votes_per_party: Vec<PartyVote>,
    pub nulos: u64,
    pub abstencion: u64,
    pub afirmativos: u64,
    pub blancos: u64,
    pub impugnados: u64,
    pub votos_totales: u64,
    pub census: u64,
}

impl VoteSummary {
    /// Party with the strictly highest count. First listed wins a tie.
    pub fn winner(&self) -> Option<&PartyVote> {
        let mut best: Option<&PartyVote> = None;
        for p in &self.votes_per_party {
            match best {
                Some(b) if p.votes > b.votes => best = Some(p),
                None => best = Some(p),
                _ => {}
            }
        }
        best
    }
}

/// Walk the ancestor chain and slot each father into its level. Unknown
/// levels are ignored. Level 1 is the country and always the same.
pub fn location_of(data: &ScopeData) -> Location {
    let mut loc = Location::default();
    for father in &data.fathers {
        let named = Named {
            name: father.name.clone(),
            code: father.codigo.clone(),
        };
        match father.level {
            1 => {
                loc.pais = Some(Named {
                    name: "Argentina".into(),
                    code: "1".into(),
                })
            }
            2 => loc.distrito = Some(named),
            4 => loc.seccion = Some(named),
            5 => loc.comuna_municipio = Some(named),
            6 => loc.circuito = Some(named),
            7 => loc.local_de_comicio = Some(named),
            8 => loc.numero_de_mesa = Some(named),
            _ => {}
        }
    }
    loc
}

pub fn votes_of(data: &ScopeData) -> VoteSummary {
    VoteSummary {
        votes_per_party: data
            .partidos
            .iter()
            .map(|p| PartyVote {
                code: p.code.clone(),
                name: p.name.clone(),
                votes: p.votos,
            })
            .collect(),
        nulos: data.nulos,
        abstencion: data.abstencion,
        afirmativos: data.afirmativos,
        blancos: data.blancos,
        impugnados: data.impugnados,
        votos_totales: data.total_votos,
        census: data.census,
    }
}

/* ---------- tests ---------- */
