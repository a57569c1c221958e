use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::{error::ApiResult, main_lib::AppState};
use quotable_core::quotes::{CreateQuoteRequest, Quote, QuoteUpdate};

const NO_QUOTES_MSG: &str = "No quotes found";
const QUOTE_DELETED_MSG: &str = "Quote deleted";

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

/// GET /quotes answers either the full array or, for an empty store, an
/// informational message. Both are 200; an empty store is not an error.
#[derive(Serialize)]
#[serde(untagged)]
enum ListQuotesResponse {
    Quotes(Vec<Quote>),
    Message(MessageBody),
}

async fn create_quote(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateQuoteRequest>>,
) -> ApiResult<Json<Quote>> {
    // A missing body behaves like an empty one: fall back to the source.
    let request = body.map(|Json(b)| b).unwrap_or_default();
    let quote = state.quote_service.create_quote(request).await?;
    Ok(Json(quote))
}

async fn list_quotes(State(state): State<Arc<AppState>>) -> ApiResult<Json<ListQuotesResponse>> {
    debug!("Fetching all quotes...");
    let quotes = state.quote_service.get_quotes()?;
    if quotes.is_empty() {
        return Ok(Json(ListQuotesResponse::Message(MessageBody {
            message: NO_QUOTES_MSG,
        })));
    }
    Ok(Json(ListQuotesResponse::Quotes(quotes)))
}

async fn get_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Quote>> {
    debug!("Fetching quote {}...", id);
    let quote = state.quote_service.get_quote(&id)?;
    Ok(Json(quote))
}

async fn update_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<QuoteUpdate>,
) -> ApiResult<Json<Quote>> {
    debug!("Updating quote {}...", id);
    let quote = state.quote_service.update_quote(&id, update).await?;
    Ok(Json(quote))
}

async fn delete_quote(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MessageBody>> {
    debug!("Deleting quote {}...", id);
    let _ = state.quote_service.delete_quote(&id).await?;
    Ok(Json(MessageBody {
        message: QUOTE_DELETED_MSG,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route(
            "/quotes/{id}",
            get(get_quote).patch(update_quote).delete(delete_quote),
        )
}
