//! Order creation, projection and deletion logic
//!
//! The one real contract in this service: an order is created by resolving
//! the customer by exact name (creating a placeholder record if absent),
//! resolving every requested product by name and checking it against the
//! requested supplier, snapshotting the product's current unit price into
//! each line item, and summing `unit_price * quantity` into the order
//! total. Validation happens before any write; the whole aggregate is then
//! persisted in one store transaction, so a failed validation leaves
//! nothing behind.

use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;

use crate::store::{
    CustomerRef, NewCustomer, NewOrder, NewOrderItem, Order, OrderDetail, OrderStore, StoreError,
};

/// Placeholder fields for a customer record created from only a name.
const UNKNOWN_PLACE: &str = "Unknown";
const UNKNOWN_PHONE: &str = "0000000000";

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order with id {0} does not exist.")]
    NotFound(i64),
    #[error("Product with name {product} does not exist.")]
    UnknownProduct { product: String },
    #[error("Supplier with company name {supplier} does not exist for product {product}.")]
    SupplierMismatch { supplier: String, product: String },
    #[error("Order must contain at least one item.")]
    EmptyOrder,
    #[error("Quantity must be positive for product {product}.")]
    InvalidQuantity { product: String },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// A requested line item. Any client-quoted price has already been dropped
/// by the gateway; the product's current price is authoritative.
#[derive(Debug, Clone)]
pub struct RequestedItem {
    pub product_name: String,
    pub supplier_company_name: String,
    pub quantity: i32,
}

/// Order creation command.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub first_name: String,
    pub last_name: String,
    pub items: Vec<RequestedItem>,
}

/// Request-scoped handle over the relational store.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// All orders with embedded customer names and items.
    pub async fn list_orders(&self) -> Result<Vec<OrderDetail>, OrderError> {
        Ok(self.store.fetch_orders().await?)
    }

    /// One order projection, or `NotFound`.
    pub async fn get_order(&self, order_id: i64) -> Result<OrderDetail, OrderError> {
        self.store
            .fetch_order(order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }

    /// Create an order aggregate.
    ///
    /// Customer matching is exact (first_name, last_name) equality; two
    /// concurrent creates naming the same brand-new pair can race and
    /// produce duplicate customer rows, since the lookup runs outside the
    /// write transaction. Known limitation of the name-based identity.
    pub async fn create_order(&self, req: CreateOrder) -> Result<Order, OrderError> {
        if req.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        let customer = match self
            .store
            .find_customer_by_name(&req.first_name, &req.last_name)
            .await?
        {
            Some(existing) => CustomerRef::Existing(existing.id),
            None => CustomerRef::New(NewCustomer {
                first_name: req.first_name.clone(),
                last_name: req.last_name.clone(),
                city: UNKNOWN_PLACE.to_string(),
                country: UNKNOWN_PLACE.to_string(),
                phone: UNKNOWN_PHONE.to_string(),
            }),
        };

        let mut items = Vec::with_capacity(req.items.len());
        let mut total = Decimal::ZERO;

        for item in &req.items {
            if item.quantity <= 0 {
                return Err(OrderError::InvalidQuantity {
                    product: item.product_name.clone(),
                });
            }

            let product = self
                .store
                .find_product_by_name(&item.product_name)
                .await?
                .ok_or_else(|| OrderError::UnknownProduct {
                    product: item.product_name.clone(),
                })?;

            // The supplier must be the one actually owning the product.
            if self
                .store
                .find_supplier_for_product(product.supplier_id, &item.supplier_company_name)
                .await?
                .is_none()
            {
                return Err(OrderError::SupplierMismatch {
                    supplier: item.supplier_company_name.clone(),
                    product: item.product_name.clone(),
                });
            }

            total += product.unit_price * Decimal::from(item.quantity);
            items.push(NewOrderItem {
                product_id: product.id,
                quantity: item.quantity,
                unit_price: product.unit_price,
            });
        }

        let order = self
            .store
            .insert_order(NewOrder {
                customer,
                order_date: Utc::now(),
                total_amount: total,
                items,
            })
            .await?;

        tracing::info!(
            order_id = order.id,
            customer_id = order.customer_id,
            total = %order.total_amount,
            "order created"
        );
        Ok(order)
    }

    /// Hard-delete an order and its items.
    pub async fn delete_order(&self, order_id: i64) -> Result<(), OrderError> {
        if !self.store.delete_order(order_id).await? {
            tracing::warn!(order_id, "delete requested for unknown order");
            return Err(OrderError::NotFound(order_id));
        }
        tracing::info!(order_id, "order deleted");
        Ok(())
    }

    /// Store round-trip check for the health endpoint.
    pub async fn health_check(&self) -> Result<(), OrderError> {
        Ok(self.store.health_check().await?)
    }
}
