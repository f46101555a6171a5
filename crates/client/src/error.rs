//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;

use reqwest::StatusCode;

/// The result type that uses [ApiError] as the error type.
pub type Result<T> = std::result::Result<T, ApiError>;

/// The error type for talking to the stronger backend.
#[derive(Debug)]
pub enum ApiError {
    /// The transport rejected the request before a response arrived.
    Http(reqwest::Error),

    /// The server answered with an unexpected status code.
    Response {
        status_code: StatusCode,
        message: String,
    },

    /// A mutating request was attempted without an anti-forgery
    /// token cookie.
    MissingCsrfToken,

    /// The configured base URL could not be parsed.
    BaseUrl(String),
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Http(error) => Some(error),
            ApiError::Response { .. } => None,
            ApiError::MissingCsrfToken => None,
            ApiError::BaseUrl(_) => None,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let api_error = "api error:";

        match self {
            ApiError::Http(error) => write!(f, "{api_error} HTTP request error: {error}"),
            ApiError::Response {
                status_code,
                message,
            } => write!(
                f,
                "{api_error} HTTP response error: status = {status_code}, message = {message}"
            ),
            ApiError::MissingCsrfToken => write!(
                f,
                "{api_error} the request mutates state but no csrftoken cookie is set"
            ),
            ApiError::BaseUrl(error) => write!(f, "{api_error} invalid base URL: {error}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Http(error)
    }
}
