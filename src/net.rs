// src/net.rs
//
// Blocking HTTP against the results backend. One client, short timeouts,
// one attempt per call; retry policy is "restart the run".
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::debug;

use crate::config::consts::*;
use crate::error::{FetchError, TableError};
use crate::scope::ScopeData;

/// Data source seam. Production talks HTTP; tests substitute canned
/// payloads.
pub trait Backend {
    /// Raw nomenclator document, as served.
    fn nomenclator_json(&self) -> Result<String, FetchError>;
    /// Decoded scope payload for one table code.
    fn scope_data(&self, code: &str) -> Result<ScopeData, TableError>;
}

pub struct HttpBackend {
    client: Client,
    base: String,
}

impl HttpBackend {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base(BASE_URL)
    }

    pub fn with_base(base: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| FetchError(format!("client setup: {e}")))?;
        Ok(Self { client, base: base.into() })
    }

    fn get(&self, url: &str) -> Result<Response, FetchError> {
        debug!(%url, "GET");
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError(format!("GET {url}: {e}")))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError(format!("HTTP {status} for {url}")));
        }
        Ok(resp)
    }

    fn body(&self, url: &str) -> Result<String, FetchError> {
        self.get(url)?
            .text()
            .map_err(|e| FetchError(format!("read body of {url}: {e}")))
    }
}

impl Backend for HttpBackend {
    fn nomenclator_json(&self) -> Result<String, FetchError> {
        self.body(&format!("{}{}", self.base, NOMENCLATOR_PATH))
    }

    fn scope_data(&self, code: &str) -> Result<ScopeData, TableError> {
        let url = format!("{}{}/{}/{}", self.base, SCOPE_DATA_PATH, code, ELECTION_ID);
        let body = self.body(&url)?;
        serde_json::from_str(&body)
            .map_err(|e| TableError::Extraction(format!("scope payload for {code}: {e}")))
    }
}
