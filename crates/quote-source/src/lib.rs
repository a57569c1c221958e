//! External quote source client.
//!
//! This crate talks to the third-party public quotes API that supplies
//! fallback content when a create request arrives without a complete
//! `quote`/`author` pair. The HTTP client lives behind the
//! [`QuoteSourceTrait`] so callers (and tests) can swap the implementation.

mod errors;
mod models;
mod provider;

pub use errors::SourceError;
pub use models::SourceQuote;
pub use provider::{QuoteSourceTrait, RestQuoteSource, DEFAULT_SOURCE_URL};
