use metro_core::MetroError;
use metro_network::NetworkError;
use thiserror::Error;

/// Everything that can go wrong reading and validating an input file (§6,
/// §7's `InputError` kind). Every variant maps to `MetroError::Input`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {what}, found end of input")]
    UnexpectedEof { what: &'static str },

    #[error("expected {what}, found {found:?}")]
    UnexpectedToken { what: &'static str, found: String },

    #[error("station name {name:?} is {len} bytes, exceeding the 127-byte limit (§6)")]
    StationNameTooLong { name: String, len: usize },

    #[error("line station {name:?} does not match any of the {s} declared station names")]
    UnknownLineStation { name: String, s: usize },

    #[error("network construction failed: {0}")]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;

impl From<ParseError> for MetroError {
    fn from(e: ParseError) -> Self {
        MetroError::Input(e.to_string())
    }
}
