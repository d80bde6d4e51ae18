use thiserror::Error;

/// A required field was absent from a feed record.
///
/// Never substituted with zero: a zero magnitude would silently pick the lowest
/// color bucket and a zero radius.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Missing required field: {field}")]
pub struct MissingFieldError {
    pub field: &'static str,
}

impl MissingFieldError {
    pub const MAGNITUDE: Self = Self { field: "magnitude" };
    pub const TIMESTAMP: Self = Self {
        field: "timestampMs",
    };
    pub const GEOMETRY: Self = Self { field: "geometry" };
}

/// Main crate error type
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Feed record is missing a field the encoder needs
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),

    /// Client HTTP error (4xx)
    #[error("Client error: status code: {status_code}, error message: {error_message}")]
    ClientRequest {
        status_code: u16,
        error_message: String,
    },

    /// Server HTTP error (5xx)
    #[error("Server error: status code: {status_code}, error message: {error_message}")]
    ServerRequest {
        status_code: u16,
        error_message: String,
    },

    /// Generic request error (connect, timeout, body read)
    #[error("Generic request error: {0}")]
    GenericRequest(String),

    /// JSON parse error
    #[error("Json parse error: {0}")]
    JsonParse(String),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    pub fn json_parse(msg: impl Into<String>) -> Self {
        Error::JsonParse(msg.into())
    }

    /// Field name when this is a missing-field failure.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Error::MissingField(e) => Some(e.field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
