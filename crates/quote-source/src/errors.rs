use thiserror::Error;

/// Errors that can occur while fetching fallback quotes.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The request could not be sent or the connection failed.
    #[error("Quote source request failed: {0}")]
    Request(String),

    /// The source answered with a non-success status code.
    #[error("Quote source returned status {status}")]
    Status { status: u16 },

    /// The response body was not the expected list of quote objects.
    #[error("Failed to decode quote source response: {0}")]
    Decode(String),

    /// The source answered successfully but with zero candidates.
    /// Selection over an empty list is undefined, so this surfaces as a fault.
    #[error("Quote source returned no quotes")]
    Empty,
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SourceError::Decode(err.to_string())
        } else {
            SourceError::Request(err.to_string())
        }
    }
}
