use thiserror::Error;

#[derive(Error, Debug)]
pub enum KingraphError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A non-2xx response. Displays as the bare message so callers can show it as-is.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl KingraphError {
    /// HTTP status of a rejected response, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            KingraphError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, KingraphError>;
