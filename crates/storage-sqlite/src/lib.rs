//! SQLite storage implementation for Quotable.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in
//! `quotable-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The quote repository implementation
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. All other crates are database-agnostic and work with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod quotes;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from quotable-core for convenience
pub use quotable_core::errors::{DatabaseError, Error, Result};
