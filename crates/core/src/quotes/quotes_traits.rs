use crate::errors::Result;
use crate::quotes::quotes_model::{CreateQuoteRequest, NewQuote, Quote, QuoteUpdate};
use async_trait::async_trait;

/// Trait for quote repository operations.
///
/// Id-addressed lookups return `Ok(None)` for absent records; only genuine
/// storage failures surface as errors.
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    fn find_all(&self) -> Result<Vec<Quote>>;
    fn find_by_id(&self, quote_id: &str) -> Result<Option<Quote>>;
    async fn insert(&self, new_quote: NewQuote) -> Result<Quote>;
    async fn update_by_id(&self, quote_id: &str, update: QuoteUpdate) -> Result<Option<Quote>>;
    async fn delete_by_id(&self, quote_id: &str) -> Result<Option<Quote>>;
}

/// Trait for quote service operations.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    async fn create_quote(&self, request: CreateQuoteRequest) -> Result<Quote>;
    fn get_quotes(&self) -> Result<Vec<Quote>>;
    fn get_quote(&self, quote_id: &str) -> Result<Quote>;
    async fn update_quote(&self, quote_id: &str, update: QuoteUpdate) -> Result<Quote>;
    async fn delete_quote(&self, quote_id: &str) -> Result<Quote>;
}
