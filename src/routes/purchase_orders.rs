use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, Paginated, PaginationParams};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{CreatePurchaseOrderRequest, PurchaseOrder};
use crate::error::{ApiError, ApiResult};

/// Create a purchase order against a registered supplier
pub async fn create_purchase_order(
    auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePurchaseOrderRequest>,
) -> ApiResult<Created<DataResponse<PurchaseOrder>>> {
    if req.lines.is_empty() {
        return Err(ApiError::BadRequest("purchase order needs at least one line".to_string()));
    }
    if state.projects.get(req.project_id).is_none() {
        return Err(ApiError::NotFound(format!("Project {} not found", req.project_id)));
    }
    if state.suppliers.get(req.supplier_id).is_none() {
        return Err(ApiError::NotFound(format!("Supplier {} not found", req.supplier_id)));
    }

    let order = PurchaseOrder::new(req);
    tracing::info!(
        user_id = %auth.user_id,
        order_id = %order.id,
        total = order.total,
        "Purchase order created"
    );
    state.purchase_orders.save(order.clone());

    Ok(Created(DataResponse::new(order)))
}

/// List purchase orders, newest first
pub async fn list_purchase_orders(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Paginated<PurchaseOrder> {
    Paginated::slice(state.purchase_orders.list(), &pagination)
}

/// Get a purchase order by ID
pub async fn get_purchase_order(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<DataResponse<PurchaseOrder>> {
    state
        .purchase_orders
        .get(order_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound(format!("Purchase order {order_id} not found")))
}
