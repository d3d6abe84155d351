use http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenF1Error {
    /// Transport failure: DNS, refused connection, reset, etc.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// The body was not JSON, or not the shape of the requested record.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OpenF1Error>;
