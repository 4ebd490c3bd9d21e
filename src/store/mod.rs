//! Relational store collaborator
//!
//! `OrderStore` is the seam between the order service and the database:
//! the service resolves and validates through it, and hands it a fully
//! computed aggregate to persist. `postgres::PgStore` is the production
//! implementation; tests run against `memory::MemoryStore`.

pub mod models;
pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

pub use models::{
    Customer, CustomerRef, NewCustomer, NewOrder, NewOrderItem, Order, OrderDetail,
    OrderItemDetail, Product, Supplier,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD + query operations over the five order-management tables.
///
/// Reads are individually consistent; `insert_order` and `delete_order`
/// are atomic (all rows of the aggregate or none).
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Exact (first_name, last_name) match.
    async fn find_customer_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Customer>, StoreError>;

    /// Exact product name match.
    async fn find_product_by_name(
        &self,
        product_name: &str,
    ) -> Result<Option<Product>, StoreError>;

    /// Supplier matching both the product's supplier id and the requested
    /// company name.
    async fn find_supplier_for_product(
        &self,
        supplier_id: i64,
        company_name: &str,
    ) -> Result<Option<Supplier>, StoreError>;

    /// Persist a complete order aggregate (customer if new, order row,
    /// items, total) in one transaction. Returns the stored order row.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError>;

    /// All orders with customer names and denormalized items, in id order.
    async fn fetch_orders(&self) -> Result<Vec<OrderDetail>, StoreError>;

    /// One order with customer name and denormalized items.
    async fn fetch_order(&self, order_id: i64) -> Result<Option<OrderDetail>, StoreError>;

    /// Remove an order and its items. Returns false if the order does not
    /// exist. Customers, products and suppliers are untouched.
    async fn delete_order(&self, order_id: i64) -> Result<bool, StoreError>;

    /// Store round-trip check for the health endpoint.
    async fn health_check(&self) -> Result<(), StoreError>;
}
