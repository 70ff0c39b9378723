use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    /// Supply category, e.g. "concrete", "steel", "finishing".
    pub category: String,
    pub city: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// 0.0 - 5.0
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub category: String,
    pub city: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl Supplier {
    pub fn new(req: CreateSupplierRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: req.name,
            category: req.category,
            city: req.city,
            phone: req.phone,
            email: req.email,
            rating: req.rating,
            created_at: Utc::now(),
        }
    }
}

/// Purchase order status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Sent,
    Confirmed,
    Delivered,
    Cancelled,
}

/// A single ordered line on a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Purchase order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub project_id: Uuid,
    pub supplier_id: Uuid,
    pub status: PurchaseOrderStatus,
    pub lines: Vec<OrderLine>,
    /// Sum of line totals, SAR. Computed server-side.
    pub total: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    pub project_id: Uuid,
    pub supplier_id: Uuid,
    pub lines: Vec<OrderLine>,
}

impl PurchaseOrder {
    pub fn new(req: CreatePurchaseOrderRequest) -> Self {
        let now = Utc::now();
        let total = req.lines.iter().map(OrderLine::total).sum();
        Self {
            id: Uuid::new_v4(),
            project_id: req.project_id,
            supplier_id: req.supplier_id,
            status: PurchaseOrderStatus::Draft,
            lines: req.lines,
            total,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_order_total_sums_lines() {
        let po = PurchaseOrder::new(CreatePurchaseOrderRequest {
            project_id: Uuid::new_v4(),
            supplier_id: Uuid::new_v4(),
            lines: vec![
                OrderLine {
                    item: "Cement OPC".into(),
                    unit: "bag".into(),
                    quantity: 200.0,
                    unit_price: 16.0,
                },
                OrderLine {
                    item: "Rebar 16mm".into(),
                    unit: "ton".into(),
                    quantity: 3.5,
                    unit_price: 2850.0,
                },
            ],
        });

        assert!((po.total - (200.0 * 16.0 + 3.5 * 2850.0)).abs() < 1e-9);
        assert_eq!(po.status, PurchaseOrderStatus::Draft);
    }
}
