//! Error handling and custom error types
//!
//! Two failure kinds come out of the strategy client: the service call itself
//! failed, or it succeeded with a payload we cannot use.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Generative service error: {0}")]
    Service(String),

    #[error("Malformed response from generative service: {0}")]
    MalformedResponse(String),

    #[error("Invalid generation parameters: {0}")]
    InvalidParams(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Service(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
