//! Quotes domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a persisted quote.
///
/// The `text` field serializes as `"quote"` to match the service's wire
/// format; request bodies use the same name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

/// Resolved content for a quote about to be inserted.
///
/// By the time a `NewQuote` exists, both fields are present and non-empty,
/// whether they came from the client or from the external source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
}

/// Request body for creating a quote.
///
/// Both fields are optional; an incomplete pair triggers the external
/// source fallback instead of a validation error.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl CreateQuoteRequest {
    /// Return the client-supplied content if both fields are present and
    /// non-empty.
    pub fn content(&self) -> Option<NewQuote> {
        match (&self.quote, &self.author) {
            (Some(text), Some(author)) if !text.is_empty() && !author.is_empty() => {
                Some(NewQuote {
                    text: text.clone(),
                    author: author.clone(),
                })
            }
            _ => None,
        }
    }
}

/// Partial update for an existing quote. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteUpdate {
    #[serde(default, rename = "quote")]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl QuoteUpdate {
    /// True when no fields were supplied at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.author.is_none()
    }
}
