use thiserror::Error;

use crate::error_handler::models::MaybeResponse;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Reqwest error while attempting to reach the API: {0}")]
    ClientFetchError(#[from] reqwest::Error),
    #[error("Status code other than 2xx received from API. StatusCode: {0}. Body: {1}")]
    StatusCodeFetchError(reqwest::StatusCode, String),
    #[error("Could not parse response body returned by the API. Error: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl Error {
    /// Message key carried in the body of an error response, if the backend sent one.
    pub fn error_code(&self) -> Option<String> {
        match self {
            Error::StatusCodeFetchError(_, body) => serde_json::from_str::<MaybeResponse>(body)
                .ok()
                .and_then(|res| res.error)
                .and_then(|err| err.code()),
            Error::ClientFetchError(_) | Error::ParseError(_) => None,
        }
    }
}
