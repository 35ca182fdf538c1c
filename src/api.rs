//! Read-only client for the country information service.

use std::time::Duration;

use tracing::{debug, instrument, warn};

use crate::model::{CountryRecord, Region};

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fields requested from the service, matching what [`CountryRecord`] reads.
const FIELDS: &str = "name,flag,flags,population,capital";

/// One request against the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// `GET /name/{query}`
    Name(String),
    /// `GET /all`
    All,
    /// `GET /region/{region}`
    Region(Region),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type ApiResult = Result<Vec<CountryRecord>, ApiError>;

/// Anything that can answer a [`Query`]. Calls may block.
pub trait CountryApi: Send + Sync + 'static {
    fn fetch(&self, query: &Query) -> ApiResult;
}

/// The public REST countries service, reached over `ureq`.
pub struct RestCountries {
    agent: ureq::Agent,
    base_url: String,
}

impl RestCountries {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, query: &Query) -> String {
        match query {
            Query::Name(name) => format!("{}/name/{}", self.base_url, urlencoding::encode(name)),
            Query::All => format!("{}/all", self.base_url),
            Query::Region(region) => format!("{}/region/{}", self.base_url, region.slug()),
        }
    }
}

impl Default for RestCountries {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

impl CountryApi for RestCountries {
    #[instrument(skip(self))]
    fn fetch(&self, query: &Query) -> ApiResult {
        let url = self.url_for(query);
        debug!(url, "requesting countries");

        match self.agent.get(&url).query("fields", FIELDS).call() {
            Ok(res) => res.into_json::<Vec<CountryRecord>>().map_err(|e| ApiError::Decode(e.to_string())),
            Err(ureq::Error::Status(code, res)) => {
                warn!("{code} {} from {url}", res.status_text());
                Err(ApiError::Status(code))
            }
            Err(ureq::Error::Transport(t)) => {
                warn!(err = %t, "transport error");
                Err(ApiError::Transport(t.to_string()))
            }
        }
    }
}
