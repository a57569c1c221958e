use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::quotes::quotes_model::{CreateQuoteRequest, NewQuote, Quote, QuoteUpdate};
use crate::quotes::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use quotable_quote_source::{QuoteSourceTrait, SourceError};

const QUOTE_NOT_FOUND: &str = "Quote not found";

/// Service implementing the quote CRUD operations.
///
/// Reads go straight to the repository; creation may consult the external
/// quote source first when the request carries no usable content.
pub struct QuoteService<R: QuoteRepositoryTrait> {
    quote_repo: Arc<R>,
    quote_source: Arc<dyn QuoteSourceTrait>,
}

impl<R: QuoteRepositoryTrait> QuoteService<R> {
    pub fn new(quote_repo: Arc<R>, quote_source: Arc<dyn QuoteSourceTrait>) -> Self {
        QuoteService {
            quote_repo,
            quote_source,
        }
    }

    /// Fetch the candidate list from the external source and pick one
    /// uniformly at random. An empty candidate list is a fault.
    async fn pick_fallback(&self) -> Result<NewQuote> {
        let candidates = self.quote_source.fetch_all().await?;
        let picked = candidates
            .choose(&mut rand::thread_rng())
            .ok_or(SourceError::Empty)?;
        debug!("Selected fallback quote by {}", picked.author);
        Ok(NewQuote {
            text: picked.text.clone(),
            author: picked.author.clone(),
        })
    }
}

/// Ids are UUID strings; anything else is malformed input, not a miss.
fn validate_id(quote_id: &str) -> Result<()> {
    Uuid::parse_str(quote_id)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidId(quote_id.to_string()).into())
}

#[async_trait]
impl<R: QuoteRepositoryTrait + Send + Sync> QuoteServiceTrait for QuoteService<R> {
    async fn create_quote(&self, request: CreateQuoteRequest) -> Result<Quote> {
        let new_quote = match request.content() {
            Some(content) => content,
            None => self.pick_fallback().await?,
        };
        self.quote_repo.insert(new_quote).await
    }

    fn get_quotes(&self) -> Result<Vec<Quote>> {
        self.quote_repo.find_all()
    }

    fn get_quote(&self, quote_id: &str) -> Result<Quote> {
        validate_id(quote_id)?;
        self.quote_repo
            .find_by_id(quote_id)?
            .ok_or_else(|| crate::Error::NotFound(QUOTE_NOT_FOUND.to_string()))
    }

    async fn update_quote(&self, quote_id: &str, update: QuoteUpdate) -> Result<Quote> {
        validate_id(quote_id)?;
        self.quote_repo
            .update_by_id(quote_id, update)
            .await?
            .ok_or_else(|| crate::Error::NotFound(QUOTE_NOT_FOUND.to_string()))
    }

    async fn delete_quote(&self, quote_id: &str) -> Result<Quote> {
        validate_id(quote_id)?;
        self.quote_repo
            .delete_by_id(quote_id)
            .await?
            .ok_or_else(|| crate::Error::NotFound(QUOTE_NOT_FOUND.to_string()))
    }
}
