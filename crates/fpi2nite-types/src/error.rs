use std::fmt;

/// Result type for fpi2nite-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Reference instant could not be parsed
    InvalidTimestamp(String),

    /// Unknown stream key
    UnknownStream(String),

    /// Look-back reaches past the representable date range
    InvalidWindow { ndays: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp(input) => write!(
                f,
                "Invalid timestamp '{}': expected RFC 3339, 'YYYY-MM-DDTHH:MM:SS' or 'YYYY-MM-DD'",
                input
            ),
            Error::UnknownStream(key) => write!(
                f,
                "Unknown stream '{}': expected one of asassn, fermi, swift",
                key
            ),
            Error::InvalidWindow { ndays } => write!(
                f,
                "Invalid window: {} days before the reference date is out of range",
                ndays
            ),
        }
    }
}

impl std::error::Error for Error {}
