use linguist_types::{ResponseStatus, UnknownCode};

use crate::transport::TransportError;

/// Every way a service call can fail
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transport could not complete the round trip
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Status code outside the documented table
    #[error("{code} - {message}")]
    Protocol { code: u16, message: String },

    /// Documented, non-successful status code
    #[error("{} - {}", .0.code(), .0.description())]
    Status(ResponseStatus),

    #[error("Empty response body")]
    EmptyBody,

    /// A field the response schema requires is missing or malformed
    #[error("Malformed response: {0}")]
    Decode(String),

    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),

    #[error("Invalid service configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Decode(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
