use fpi2nite_types::StreamKind;
use std::fmt;

/// Result type for fpi2nite-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// One stream's extraction failed; no partial table is returned
    Stream {
        stream: StreamKind,
        source: fpi2nite_streams::Error,
    },

    /// Archive client could not be created
    Index(fpi2nite_index::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Config file is not valid TOML for this schema
    ConfigParse(toml::de::Error),

    /// Config could not be serialized
    ConfigWrite(toml::ser::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Stream { stream, source } => {
                write!(f, "{} extraction failed: {}", stream.label(), source)
            }
            Error::Index(err) => write!(f, "Index error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::ConfigParse(err) => write!(f, "Invalid configuration: {}", err),
            Error::ConfigWrite(err) => write!(f, "Could not write configuration: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Stream { source, .. } => Some(source),
            Error::Index(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::ConfigParse(err) => Some(err),
            Error::ConfigWrite(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<fpi2nite_index::Error> for Error {
    fn from(err: fpi2nite_index::Error) -> Self {
        Error::Index(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigWrite(err)
    }
}
