use serde::Deserialize;

/// A candidate quote as returned by the external source.
///
/// Both fields are required; a payload with missing or null fields is a
/// decode failure, not a partially-usable candidate.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SourceQuote {
    pub text: String,
    pub author: String,
}
