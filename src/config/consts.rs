// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://resultados.gob.ar";
pub const NOMENCLATOR_PATH: &str = "/backend-difu/nomenclator/getNomenclator";
pub const SCOPE_DATA_PATH: &str = "/backend-difu/scope/data/getScopeData";
pub const ELECTION_ID: u32 = 1; // trailing segment of getScopeData
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("mesa_scrape/", env!("CARGO_PKG_VERSION"));

// Local files
pub const DEFAULT_NOMENCLATOR_FILE: &str = "raw_table_data.json";
pub const DEFAULT_OUTPUT_FILE: &str = "output.csv";
pub const DEFAULT_CHECKPOINT_FILE: &str = "last_processed_table.txt";

// Table discovery: mesas sit at level 8 and their codes end in 'X'.
pub const TABLE_LEVEL: u64 = 8;
pub const TABLE_CODE_SUFFIX: char = 'X';

// Scrape
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// National baseline shares, keyed by party code.
pub const PREFERENCES: &[(&str, f64)] = &[
    ("132", 0.2383), // Juntos por el Cambio
    ("134", 0.3668), // Union por la Patria
    ("135", 0.2998), // La Libertad Avanza
    ("136", 0.0273), // Frente de Izquierda
    ("133", 0.0678), // Hacemos por Nuestro Pais
];

// Tracked party columns, in output order: (code, column name).
pub const TRACKED_PARTIES: &[(&str, &str)] = &[
    ("134", "UNION POR LA PATRIA"),
    ("135", "LA LIBERTAD AVANZA"),
    ("132", "JUNTOS POR EL CAMBIO"),
    ("133", "HACEMOS POR NUESTRO PAIS"),
    ("136", "FRENTE DE IZQUIERDA Y DE TRABAJADORES - UNIDAD"),
];

// Severity cutoffs on the p-value.
pub const P_NORMAL_FLOOR: f64 = 1e-10;
pub const P_MODERATE_FLOOR: f64 = 1e-20;
