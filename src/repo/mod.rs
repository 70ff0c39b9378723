//! Repository interfaces over the external document store.
//!
//! The document database backing this application is an external
//! collaborator; handlers reach it only through these traits, injected via
//! `AppState`. The in-memory implementations below stand in for it and
//! define the contract a real store adapter has to meet.

use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::{Project, PurchaseOrder, Quote, Supplier};

pub trait ProjectRepository: Send + Sync {
    /// Insert or replace by id.
    fn save(&self, project: Project);
    fn get(&self, id: Uuid) -> Option<Project>;
    /// All projects, newest first.
    fn list(&self) -> Vec<Project>;
    fn delete(&self, id: Uuid) -> bool;
}

pub trait SupplierRepository: Send + Sync {
    fn save(&self, supplier: Supplier);
    fn get(&self, id: Uuid) -> Option<Supplier>;
    fn list(&self) -> Vec<Supplier>;
    fn delete(&self, id: Uuid) -> bool;
}

pub trait PurchaseOrderRepository: Send + Sync {
    fn save(&self, order: PurchaseOrder);
    fn get(&self, id: Uuid) -> Option<PurchaseOrder>;
    fn list(&self) -> Vec<PurchaseOrder>;
}

pub trait QuoteRepository: Send + Sync {
    fn save(&self, quote: Quote);
    fn get(&self, id: Uuid) -> Option<Quote>;
    fn list(&self) -> Vec<Quote>;
}

/// Shared map-backed table; rows are cloned out so callers never hold the
/// lock across an await point.
struct Table<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone> Table<T> {
    fn save(&self, id: Uuid, row: T) {
        self.rows.write().insert(id, row);
    }

    fn get(&self, id: Uuid) -> Option<T> {
        self.rows.read().get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    fn delete(&self, id: Uuid) -> bool {
        self.rows.write().remove(&id).is_some()
    }
}

#[derive(Default)]
pub struct InMemoryProjects {
    table: Table<Project>,
}

impl ProjectRepository for InMemoryProjects {
    fn save(&self, project: Project) {
        self.table.save(project.id, project);
    }

    fn get(&self, id: Uuid) -> Option<Project> {
        self.table.get(id)
    }

    fn list(&self) -> Vec<Project> {
        let mut projects = self.table.all();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    fn delete(&self, id: Uuid) -> bool {
        self.table.delete(id)
    }
}

#[derive(Default)]
pub struct InMemorySuppliers {
    table: Table<Supplier>,
}

impl SupplierRepository for InMemorySuppliers {
    fn save(&self, supplier: Supplier) {
        self.table.save(supplier.id, supplier);
    }

    fn get(&self, id: Uuid) -> Option<Supplier> {
        self.table.get(id)
    }

    fn list(&self) -> Vec<Supplier> {
        let mut suppliers = self.table.all();
        suppliers.sort_by(|a, b| a.name.cmp(&b.name));
        suppliers
    }

    fn delete(&self, id: Uuid) -> bool {
        self.table.delete(id)
    }
}

#[derive(Default)]
pub struct InMemoryPurchaseOrders {
    table: Table<PurchaseOrder>,
}

impl PurchaseOrderRepository for InMemoryPurchaseOrders {
    fn save(&self, order: PurchaseOrder) {
        self.table.save(order.id, order);
    }

    fn get(&self, id: Uuid) -> Option<PurchaseOrder> {
        self.table.get(id)
    }

    fn list(&self) -> Vec<PurchaseOrder> {
        let mut orders = self.table.all();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }
}

#[derive(Default)]
pub struct InMemoryQuotes {
    table: Table<Quote>,
}

impl QuoteRepository for InMemoryQuotes {
    fn save(&self, quote: Quote) {
        self.table.save(quote.id, quote);
    }

    fn get(&self, id: Uuid) -> Option<Quote> {
        self.table.get(id)
    }

    fn list(&self) -> Vec<Quote> {
        let mut quotes = self.table.all();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CreateProjectRequest;

    fn project(name: &str) -> Project {
        Project::new(
            Uuid::new_v4(),
            CreateProjectRequest {
                name: name.to_string(),
                description: "test".to_string(),
                location: "Riyadh".to_string(),
                project_type: None,
                quality_tier: None,
                budget: None,
                start_date: None,
                end_date: None,
                image_url: None,
            },
        )
    }

    #[test]
    fn save_get_delete_round_trip() {
        let repo = InMemoryProjects::default();
        let p = project("Tower A");
        let id = p.id;

        repo.save(p);
        assert_eq!(repo.get(id).unwrap().name, "Tower A");
        assert!(repo.delete(id));
        assert!(repo.get(id).is_none());
        assert!(!repo.delete(id));
    }

    #[test]
    fn save_replaces_existing_row() {
        let repo = InMemoryProjects::default();
        let mut p = project("Tower A");
        let id = p.id;
        repo.save(p.clone());

        p.name = "Tower B".to_string();
        repo.save(p);

        assert_eq!(repo.list().len(), 1);
        assert_eq!(repo.get(id).unwrap().name, "Tower B");
    }
}
