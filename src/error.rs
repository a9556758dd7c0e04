use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Everything a catalogue call can fail with.
///
/// `InvalidArgument` and `NotFound` are terminal for the given input;
/// `Transport` may succeed on a retry; `MalformedResponse` means the site
/// changed its markup underneath us.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("transport failure{}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        status: Option<u16>,
        #[source]
        source: Option<reqwest_middleware::Error>,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("course not found")]
    NotFound,
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        CatalogError::Transport {
            status: e.status().map(|s| s.as_u16()),
            source: Some(reqwest_middleware::Error::Reqwest(e)),
        }
    }
}

impl From<reqwest_middleware::Error> for CatalogError {
    fn from(e: reqwest_middleware::Error) -> Self {
        let status = match &e {
            reqwest_middleware::Error::Reqwest(e) => e.status().map(|s| s.as_u16()),
            reqwest_middleware::Error::Middleware(_) => None,
        };
        CatalogError::Transport {
            status,
            source: Some(e),
        }
    }
}
