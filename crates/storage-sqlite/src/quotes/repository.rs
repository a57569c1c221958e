use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use quotable_core::quotes::{NewQuote, Quote, QuoteRepositoryTrait, QuoteUpdate};
use quotable_core::Result;

use super::model::{NewQuoteDB, QuoteChangesetDB, QuoteDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::quotes;

pub struct QuoteRepository {
    pool: DbPool,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: DbPool, writer: WriteHandle) -> Self {
        QuoteRepository { pool, writer }
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    fn find_all(&self) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = quotes::table
            .load::<QuoteDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Quote::from).collect())
    }

    fn find_by_id(&self, quote_id: &str) -> Result<Option<Quote>> {
        let mut conn = get_connection(&self.pool)?;
        let row = quotes::table
            .find(quote_id)
            .first::<QuoteDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Quote::from))
    }

    async fn insert(&self, new_quote: NewQuote) -> Result<Quote> {
        self.writer
            .exec(move |conn| -> Result<Quote> {
                let row = NewQuoteDB::from_domain(new_quote, Uuid::new_v4().to_string());
                let result = diesel::insert_into(quotes::table)
                    .values(&row)
                    .returning(QuoteDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Quote::from(result))
            })
            .await
    }

    async fn update_by_id(&self, quote_id: &str, update: QuoteUpdate) -> Result<Option<Quote>> {
        let quote_id = quote_id.to_string();
        self.writer
            .exec(move |conn| -> Result<Option<Quote>> {
                // An empty changeset is not a valid UPDATE statement; answer
                // with the current row instead.
                if update.is_empty() {
                    let row = quotes::table
                        .find(quote_id.as_str())
                        .first::<QuoteDB>(conn)
                        .optional()
                        .map_err(StorageError::from)?;
                    return Ok(row.map(Quote::from));
                }

                let changes = QuoteChangesetDB::from(update);
                let row = diesel::update(quotes::table.find(quote_id.as_str()))
                    .set(&changes)
                    .returning(QuoteDB::as_returning())
                    .get_result::<QuoteDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                Ok(row.map(Quote::from))
            })
            .await
    }

    async fn delete_by_id(&self, quote_id: &str) -> Result<Option<Quote>> {
        let quote_id = quote_id.to_string();
        self.writer
            .exec(move |conn| -> Result<Option<Quote>> {
                let row = diesel::delete(quotes::table.find(quote_id.as_str()))
                    .returning(QuoteDB::as_returning())
                    .get_result::<QuoteDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                Ok(row.map(Quote::from))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use tempfile::tempdir;

    fn setup(dir: &tempfile::TempDir) -> QuoteRepository {
        let db_path = dir.path().join("test.db");
        let db_path = db::init(db_path.to_str().unwrap()).unwrap();
        let pool = db::create_pool(&db_path).unwrap();
        db::run_migrations(&pool).unwrap();
        let writer = db::spawn_writer(pool.clone());
        QuoteRepository::new(pool, writer)
    }

    #[tokio::test]
    async fn insert_assigns_id_and_round_trips() {
        let dir = tempdir().unwrap();
        let repo = setup(&dir);

        let created = repo
            .insert(NewQuote {
                text: "A".into(),
                author: "B".into(),
            })
            .await
            .unwrap();

        assert!(Uuid::parse_str(&created.id).is_ok());
        assert_eq!(repo.find_by_id(&created.id).unwrap(), Some(created.clone()));
        assert_eq!(repo.find_all().unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn find_all_preserves_insert_order() {
        let dir = tempdir().unwrap();
        let repo = setup(&dir);

        let mut inserted = Vec::new();
        for i in 0..3 {
            inserted.push(
                repo.insert(NewQuote {
                    text: format!("quote {i}"),
                    author: format!("author {i}"),
                })
                .await
                .unwrap(),
            );
        }

        assert_eq!(repo.find_all().unwrap(), inserted);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let dir = tempdir().unwrap();
        let repo = setup(&dir);

        let created = repo
            .insert(NewQuote {
                text: "Original".into(),
                author: "Author".into(),
            })
            .await
            .unwrap();

        let updated = repo
            .update_by_id(
                &created.id,
                QuoteUpdate {
                    text: None,
                    author: Some("Rewritten".into()),
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.text, "Original");
        assert_eq!(updated.author, "Rewritten");
    }

    #[tokio::test]
    async fn update_with_no_fields_returns_current_row() {
        let dir = tempdir().unwrap();
        let repo = setup(&dir);

        let created = repo
            .insert(NewQuote {
                text: "A".into(),
                author: "B".into(),
            })
            .await
            .unwrap();

        let unchanged = repo
            .update_by_id(&created.id, QuoteUpdate::default())
            .await
            .unwrap();
        assert_eq!(unchanged, Some(created));
    }

    #[tokio::test]
    async fn update_missing_row_returns_none() {
        let dir = tempdir().unwrap();
        let repo = setup(&dir);

        let result = repo
            .update_by_id(
                &Uuid::new_v4().to_string(),
                QuoteUpdate {
                    text: Some("X".into()),
                    author: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn delete_returns_removed_row_once() {
        let dir = tempdir().unwrap();
        let repo = setup(&dir);

        let created = repo
            .insert(NewQuote {
                text: "A".into(),
                author: "B".into(),
            })
            .await
            .unwrap();

        let deleted = repo.delete_by_id(&created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert_eq!(repo.find_by_id(&created.id).unwrap(), None);
        assert_eq!(repo.delete_by_id(&created.id).await.unwrap(), None);
    }
}
