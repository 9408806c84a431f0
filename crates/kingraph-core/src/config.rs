use url::Url;

use crate::error::{KingraphError, Result};

/// Origin of the backend service.
pub const API_BASE_URL: &str = "http://localhost:5000";

/// Prefix every endpoint path is resolved against.
pub const API_URL: &str = "http://localhost:5000/api";

const USER_AGENT: &str = concat!("kingraph/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Defaults, with `KINGRAPH_API_URL` overriding the API prefix when set.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("KINGRAPH_API_URL").unwrap_or_else(|_| API_URL.into()),
            ..Self::default()
        }
    }

    /// Parses `api_url`, rejecting URLs that cannot carry path segments.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_url)?;
        if url.cannot_be_a_base() {
            return Err(KingraphError::Config(format!(
                "API URL cannot be used as a base: {}",
                self.api_url
            )));
        }
        Ok(url)
    }
}
