//! Row types for the five order-management tables, plus the write and
//! projection shapes the store trait works with.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub country: String,
    pub phone: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub company_name: String,
    pub contact_name: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub fax: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub supplier_id: i64,
    pub unit_price: Decimal,
    pub package: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct Order {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub customer_id: i64,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

// ============================================================================
// Write shapes
// ============================================================================

/// Customer fields for a record created from only a name; city, country and
/// phone carry placeholder values.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub country: String,
    pub phone: String,
}

/// The customer an order belongs to: an existing row, or one to be created
/// inside the same transaction as the order.
#[derive(Debug, Clone)]
pub enum CustomerRef {
    Existing(i64),
    New(NewCustomer),
}

/// Line item with the product's unit price already snapshotted.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

/// A fully validated order aggregate ready to persist.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer: CustomerRef,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub items: Vec<NewOrderItem>,
}

// ============================================================================
// Projection shapes
// ============================================================================

/// One order joined with its customer name and denormalized items.
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    pub first_name: String,
    pub last_name: String,
    pub items: Vec<OrderItemDetail>,
}

/// Line item denormalized with product and supplier names.
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemDetail {
    pub order_id: i64,
    pub product_name: String,
    pub supplier_company_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}
