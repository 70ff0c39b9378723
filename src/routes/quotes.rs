use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, Paginated, PaginationParams};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{CreateQuoteRequest, Quote};
use crate::error::{ApiError, ApiResult};
use crate::flows;

/// Create a quotation; totals and VAT are computed server-side
pub async fn create_quote(
    auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateQuoteRequest>,
) -> ApiResult<Created<DataResponse<Quote>>> {
    if req.lines.is_empty() {
        return Err(ApiError::BadRequest("quote needs at least one line".to_string()));
    }
    if state.projects.get(req.project_id).is_none() {
        return Err(ApiError::NotFound(format!("Project {} not found", req.project_id)));
    }

    let quote = Quote::new(req);
    tracing::info!(
        user_id = %auth.user_id,
        quote_id = %quote.id,
        total = quote.total,
        "Quote created"
    );
    state.quotes.save(quote.clone());

    Ok(Created(DataResponse::new(quote)))
}

/// List quotes, newest first
pub async fn list_quotes(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Paginated<Quote> {
    Paginated::slice(state.quotes.list(), &pagination)
}

/// Get a quote by ID
pub async fn get_quote(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<Uuid>,
) -> ApiResult<DataResponse<Quote>> {
    state
        .quotes
        .get(quote_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound(format!("Quote {quote_id} not found")))
}

/// Draft a bilingual cover letter for a quote and attach it
///
/// POST /quotes/:quote_id/cover-letter
pub async fn draft_cover_letter(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(quote_id): Path<Uuid>,
) -> ApiResult<DataResponse<Quote>> {
    let mut quote = state
        .quotes
        .get(quote_id)
        .ok_or_else(|| ApiError::NotFound(format!("Quote {quote_id} not found")))?;

    let letter = flows::quote::draft_cover_letter(&state.genai, &quote).await?;

    quote.cover_letter = Some(letter);
    quote.updated_at = chrono::Utc::now();
    state.quotes.save(quote.clone());

    Ok(DataResponse::new(quote))
}
