pub mod ai;
pub mod health;
pub mod me;
pub mod prices;
pub mod projects;
pub mod purchase_orders;
pub mod quotes;
pub mod suppliers;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        .route("/me", get(me::get_me))
        // Projects
        .route("/projects", post(projects::create_project))
        .route("/projects", get(projects::list_projects))
        .route("/projects/:project_id", get(projects::get_project))
        .route("/projects/:project_id", patch(projects::update_project))
        .route("/projects/:project_id", delete(projects::delete_project))
        // Suppliers
        .route("/suppliers", post(suppliers::create_supplier))
        .route("/suppliers", get(suppliers::list_suppliers))
        .route("/suppliers/:supplier_id", get(suppliers::get_supplier))
        .route("/suppliers/:supplier_id", delete(suppliers::delete_supplier))
        // Purchase orders
        .route(
            "/purchase-orders",
            post(purchase_orders::create_purchase_order),
        )
        .route(
            "/purchase-orders",
            get(purchase_orders::list_purchase_orders),
        )
        .route(
            "/purchase-orders/:order_id",
            get(purchase_orders::get_purchase_order),
        )
        // Quotes
        .route("/quotes", post(quotes::create_quote))
        .route("/quotes", get(quotes::list_quotes))
        .route("/quotes/:quote_id", get(quotes::get_quote))
        .route(
            "/quotes/:quote_id/cover-letter",
            post(quotes::draft_cover_letter),
        )
        // Market prices
        .route("/prices", get(prices::get_market_prices))
        // AI endpoints
        .route("/ai/classify", post(ai::classify))
        .route("/ai/blueprint", post(ai::analyze_blueprint))
        .route("/ai/estimate", post(ai::estimate))
        .route("/ai/plan", post(ai::generate_plan))
        .route("/ai/design-images", post(ai::design_images))
        .route("/ai/risks", post(ai::analyze_risks))
        .route("/ai/marketing", post(ai::marketing_campaign))
}
