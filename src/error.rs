/// Error types for configuration, image handling and submission
///
/// Every error here is `Clone` so it can ride inside an iced `Message`.
/// Sources that are not `Clone` themselves are wrapped in `Arc`.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Problems resolving the API base URL
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("no API base URL configured (set HOTEL_API_BASE_URL or api_base_url in the config file)")]
    MissingBaseUrl,

    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },
}

/// Problems reading or decoding a selected image
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("{path} is {size} bytes, the limit is {limit} bytes")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{path} is not a readable image")]
    NotAnImage { path: PathBuf },

    #[error("image task failed: {0}")]
    Join(String),
}

/// Failures of a single hotel submission
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error("request failed: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response is not valid JSON: {source}")]
    Decode {
        body: String,
        #[source]
        source: Arc<serde_json::Error>,
    },
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(Arc::new(err))
    }
}
