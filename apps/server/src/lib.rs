//! Quotable server - axum HTTP app wiring.
//!
//! Exposed as a library so integration tests can build the router against
//! a throwaway database and a mock quote source.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, build_state_with_source, init_tracing, AppState};
