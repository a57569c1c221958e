use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::errors::SourceError;
use crate::models::SourceQuote;

/// Default public quotes endpoint.
pub const DEFAULT_SOURCE_URL: &str = "https://type.fit/api/quotes";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider of fallback quote content.
#[async_trait]
pub trait QuoteSourceTrait: Send + Sync {
    /// Fetch the full list of candidate quotes from the source.
    async fn fetch_all(&self) -> Result<Vec<SourceQuote>, SourceError>;
}

/// HTTP implementation backed by a public quotes API.
///
/// The endpoint returns a flat JSON array of `{text, author}` objects.
pub struct RestQuoteSource {
    client: Client,
    url: String,
}

impl RestQuoteSource {
    /// Create a source client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: url.into(),
        }
    }
}

impl Default for RestQuoteSource {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}

#[async_trait]
impl QuoteSourceTrait for RestQuoteSource {
    async fn fetch_all(&self) -> Result<Vec<SourceQuote>, SourceError> {
        debug!("Fetching fallback quotes from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let quotes = response.json::<Vec<SourceQuote>>().await?;
        debug!("Quote source returned {} candidates", quotes.len());
        Ok(quotes)
    }
}
