use std::fmt;

/// Result type for fpi2nite-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the remote archive
#[derive(Debug)]
pub enum Error {
    /// Transport failure (connection, timeout, TLS, body read)
    Http(reqwest::Error),

    /// Archive answered with a non-success status
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape
    Json(serde_json::Error),

    /// Base URL or endpoint could not be built
    InvalidUrl(String),

    /// Identifier not known to the index
    UnknownIvorn(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Remote fetch error: {}", err),
            Error::Status { url, status } => {
                write!(f, "Remote fetch error: {} returned HTTP {}", url, status)
            }
            Error::Json(err) => write!(f, "Malformed archive response: {}", err),
            Error::InvalidUrl(msg) => write!(f, "Invalid archive URL: {}", msg),
            Error::UnknownIvorn(ivorn) => write!(f, "Unknown IVORN: {}", ivorn),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Status { .. } | Error::InvalidUrl(_) | Error::UnknownIvorn(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
