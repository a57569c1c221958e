//! Database models for quotes.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use quotable_core::quotes::{NewQuote, Quote, QuoteUpdate};

/// Database model for a persisted quote.
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Eq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: String,
    pub quote: String,
    pub author: String,
}

/// Database model for inserting a quote. The id is assigned by the
/// repository before insert.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuoteDB {
    pub id: String,
    pub quote: String,
    pub author: String,
}

/// Changeset for partial updates; `None` fields are skipped by Diesel.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::quotes)]
pub struct QuoteChangesetDB {
    pub quote: Option<String>,
    pub author: Option<String>,
}

// Conversions to/from domain models
impl From<QuoteDB> for Quote {
    fn from(db: QuoteDB) -> Self {
        Self {
            id: db.id,
            text: db.quote,
            author: db.author,
        }
    }
}

impl NewQuoteDB {
    pub fn from_domain(domain: NewQuote, id: String) -> Self {
        Self {
            id,
            quote: domain.text,
            author: domain.author,
        }
    }
}

impl From<QuoteUpdate> for QuoteChangesetDB {
    fn from(domain: QuoteUpdate) -> Self {
        Self {
            quote: domain.text,
            author: domain.author,
        }
    }
}
