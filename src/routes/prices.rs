use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::ai::{MarketPriceSheet, QualityTier};
use crate::flows::pricing;
use crate::services::cache::keys;

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub location: String,
    pub quality: QualityTier,
}

/// Resolve the market unit-price sheet for a location and quality tier.
///
/// GET /prices?location=Riyadh&quality=luxury
///
/// Resolution is deterministic, so responses are served from the expiring
/// cache when present.
pub async fn get_market_prices(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PriceQuery>,
) -> DataResponse<MarketPriceSheet> {
    let city = pricing::normalize_location(&query.location);
    let cache_key = keys::market_prices(&city, query.quality.as_str());

    if let Some(cached) = state.cache.get::<MarketPriceSheet>(&cache_key) {
        return DataResponse::new(cached);
    }

    let sheet = pricing::resolve_prices(&query.location, query.quality);

    if let Err(e) = state.cache.set(&cache_key, &sheet) {
        tracing::warn!(error = %e, "Failed to cache price sheet");
    }

    DataResponse::new(sheet)
}
