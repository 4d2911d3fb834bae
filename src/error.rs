//! Error taxonomy for the Graylog MCP server.

use rmcp::Error as McpError;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Internal error types for detailed error categorization
#[derive(Error, Debug)]
pub enum Error {
    /// Connection parameters are missing or unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A tool argument failed shape validation.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Network {
        /// Fully resolved target URL of the failed request.
        url:    String,
        /// Underlying transport failure.
        source: reqwest::Error,
    },

    /// Graylog answered with a non-2xx status.
    #[error("{}", http_message(.status, .reason, .body))]
    Http {
        /// Numeric HTTP status code.
        status: u16,
        /// Canonical status text.
        reason: String,
        /// Response body text, empty when it could not be read.
        body:   String,
    },

    /// A 2xx response body was not the JSON shape we expect.
    #[error("failed to decode Graylog response: {0}")]
    Decoding(String),
}

fn http_message(status: &u16, reason: &str, body: &str) -> String {
    if body.is_empty() {
        format!("Graylog returned HTTP {status} {reason}")
    } else {
        format!("Graylog returned HTTP {status} {reason}: {body}")
    }
}

// Conversion to McpError for API boundaries
impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        match err {
            Error::Configuration(msg) | Error::InvalidParameter(msg) => {
                Self::invalid_params(msg, None)
            }
            other @ (Error::Network { .. } | Error::Http { .. } | Error::Decoding(_)) => {
                Self::internal_error(other.to_string(), None)
            }
        }
    }
}
