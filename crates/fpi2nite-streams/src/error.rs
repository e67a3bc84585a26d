use std::fmt;

/// Result type for fpi2nite-streams operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a stream
#[derive(Debug)]
pub enum Error {
    /// Listing or fetching from the remote archive failed
    Remote(fpi2nite_index::Error),

    /// Search window could not be built
    Window(fpi2nite_types::Error),

    /// Packet is not well-formed XML
    Xml(quick_xml::Error),

    /// Required element, attribute or parameter is absent (or empty)
    MissingField(String),

    /// No identifying parameter could be found for the event
    AmbiguousName(String),

    /// Every disambiguation letter is taken for this base name
    SuffixExhausted(String),

    /// Failure while handling one packet, tagged with its IVORN
    Packet { ivorn: String, source: Box<Error> },
}

impl Error {
    /// Innermost error, skipping packet context
    pub fn root(&self) -> &Error {
        match self {
            Error::Packet { source, .. } => source.root(),
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Remote(err) => write!(f, "{}", err),
            Error::Window(err) => write!(f, "{}", err),
            Error::Xml(err) => write!(f, "XML error: {}", err),
            Error::MissingField(path) => write!(f, "Missing field: {}", path),
            Error::AmbiguousName(msg) => write!(f, "Ambiguous name: {}", msg),
            Error::SuffixExhausted(base) => write!(
                f,
                "Name suffixes A-H are all assigned for '{}'",
                base
            ),
            Error::Packet { ivorn, source } => write!(f, "{} (packet {})", source, ivorn),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Remote(err) => Some(err),
            Error::Window(err) => Some(err),
            Error::Xml(err) => Some(err),
            Error::Packet { source, .. } => Some(source.as_ref()),
            Error::MissingField(_) | Error::AmbiguousName(_) | Error::SuffixExhausted(_) => None,
        }
    }
}

impl From<fpi2nite_index::Error> for Error {
    fn from(err: fpi2nite_index::Error) -> Self {
        Error::Remote(err)
    }
}

impl From<fpi2nite_types::Error> for Error {
    fn from(err: fpi2nite_types::Error) -> Self {
        Error::Window(err)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err)
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(quick_xml::Error::from(err))
    }
}
