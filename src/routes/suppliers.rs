use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, DataResponse, NoContent, Paginated, PaginationParams};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{CreateSupplierRequest, Supplier};
use crate::error::{ApiError, ApiResult};

/// Register a supplier
pub async fn create_supplier(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSupplierRequest>,
) -> ApiResult<Created<DataResponse<Supplier>>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::BadRequest("supplier name must not be empty".to_string()));
    }
    if let Some(rating) = req.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(ApiError::BadRequest("rating must be between 0 and 5".to_string()));
        }
    }

    let supplier = Supplier::new(req);
    tracing::info!(supplier_id = %supplier.id, supplier_name = %supplier.name, "Supplier registered");
    state.suppliers.save(supplier.clone());

    Ok(Created(DataResponse::new(supplier)))
}

/// List suppliers, alphabetical
pub async fn list_suppliers(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> Paginated<Supplier> {
    Paginated::slice(state.suppliers.list(), &pagination)
}

/// Get a supplier by ID
pub async fn get_supplier(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<Uuid>,
) -> ApiResult<DataResponse<Supplier>> {
    state
        .suppliers
        .get(supplier_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::NotFound(format!("Supplier {supplier_id} not found")))
}

/// Remove a supplier
pub async fn delete_supplier(
    _auth: RequireAuth,
    State(state): State<Arc<AppState>>,
    Path(supplier_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    if !state.suppliers.delete(supplier_id) {
        return Err(ApiError::NotFound(format!("Supplier {supplier_id} not found")));
    }
    Ok(NoContent)
}
