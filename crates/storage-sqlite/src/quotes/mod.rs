//! SQLite storage implementation for quotes.

mod model;
mod repository;

pub use model::{NewQuoteDB, QuoteChangesetDB, QuoteDB};
pub use repository::QuoteRepository;
