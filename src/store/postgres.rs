//! PostgreSQL implementation of the order store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Row};
use std::collections::HashMap;

use super::models::{
    Customer, CustomerRef, NewOrder, Order, OrderDetail, OrderItemDetail, Product, Supplier,
};
use super::{OrderStore, StoreError};

/// Order store backed by a PostgreSQL connection pool.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Items for a set of orders in one batched query (no per-order round
    /// trips), keyed by order id, in item id order.
    async fn fetch_items_for(
        &self,
        order_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<OrderItemDetail>>, StoreError> {
        let rows: Vec<OrderItemDetail> = sqlx::query_as(
            r#"SELECT oi.order_id, p.product_name, s.company_name AS supplier_company_name,
                      oi.unit_price, oi.quantity
               FROM order_items oi
               JOIN products p ON p.id = oi.product_id
               JOIN suppliers s ON s.id = p.supplier_id
               WHERE oi.order_id = ANY($1)
               ORDER BY oi.id"#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_order: HashMap<i64, Vec<OrderItemDetail>> = HashMap::new();
        for row in rows {
            by_order.entry(row.order_id).or_default().push(row);
        }
        Ok(by_order)
    }
}

/// Order row joined with its customer's name.
#[derive(Debug, FromRow)]
struct OrderHeaderRow {
    id: i64,
    order_date: DateTime<Utc>,
    customer_id: i64,
    total_amount: Decimal,
    first_name: String,
    last_name: String,
}

impl OrderHeaderRow {
    fn into_detail(self, items: Vec<OrderItemDetail>) -> OrderDetail {
        OrderDetail {
            order: Order {
                id: self.id,
                order_date: self.order_date,
                customer_id: self.customer_id,
                total_amount: self.total_amount,
            },
            first_name: self.first_name,
            last_name: self.last_name,
            items,
        }
    }
}

#[async_trait]
impl OrderStore for PgStore {
    async fn find_customer_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let row: Option<Customer> = sqlx::query_as(
            r#"SELECT id, first_name, last_name, city, country, phone
               FROM customers WHERE first_name = $1 AND last_name = $2"#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_product_by_name(
        &self,
        product_name: &str,
    ) -> Result<Option<Product>, StoreError> {
        let row: Option<Product> = sqlx::query_as(
            r#"SELECT id, product_name, supplier_id, unit_price, package
               FROM products WHERE product_name = $1"#,
        )
        .bind(product_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_supplier_for_product(
        &self,
        supplier_id: i64,
        company_name: &str,
    ) -> Result<Option<Supplier>, StoreError> {
        let row: Option<Supplier> = sqlx::query_as(
            r#"SELECT id, company_name, contact_name, city, country, phone, fax
               FROM suppliers WHERE id = $1 AND company_name = $2"#,
        )
        .bind(supplier_id)
        .bind(company_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let mut tx = self.pool.begin().await?;

        let customer_id = match order.customer {
            CustomerRef::Existing(id) => id,
            CustomerRef::New(c) => {
                let row = sqlx::query(
                    r#"INSERT INTO customers (first_name, last_name, city, country, phone)
                       VALUES ($1, $2, $3, $4, $5) RETURNING id"#,
                )
                .bind(&c.first_name)
                .bind(&c.last_name)
                .bind(&c.city)
                .bind(&c.country)
                .bind(&c.phone)
                .fetch_one(&mut *tx)
                .await?;
                row.get("id")
            }
        };

        let row = sqlx::query(
            r#"INSERT INTO orders (order_date, customer_id, total_amount)
               VALUES ($1, $2, $3) RETURNING id"#,
        )
        .bind(order.order_date)
        .bind(customer_id)
        .bind(order.total_amount)
        .fetch_one(&mut *tx)
        .await?;
        let order_id: i64 = row.get("id");

        for item in &order.items {
            sqlx::query(
                r#"INSERT INTO order_items (order_id, product_id, quantity, unit_price)
                   VALUES ($1, $2, $3, $4)"#,
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Order {
            id: order_id,
            order_date: order.order_date,
            customer_id,
            total_amount: order.total_amount,
        })
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderDetail>, StoreError> {
        let headers: Vec<OrderHeaderRow> = sqlx::query_as(
            r#"SELECT o.id, o.order_date, o.customer_id, o.total_amount,
                      c.first_name, c.last_name
               FROM orders o
               JOIN customers c ON c.id = o.customer_id
               ORDER BY o.id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let order_ids: Vec<i64> = headers.iter().map(|h| h.id).collect();
        let mut items = self.fetch_items_for(&order_ids).await?;

        Ok(headers
            .into_iter()
            .map(|h| {
                let order_items = items.remove(&h.id).unwrap_or_default();
                h.into_detail(order_items)
            })
            .collect())
    }

    async fn fetch_order(&self, order_id: i64) -> Result<Option<OrderDetail>, StoreError> {
        let header: Option<OrderHeaderRow> = sqlx::query_as(
            r#"SELECT o.id, o.order_date, o.customer_id, o.total_amount,
                      c.first_name, c.last_name
               FROM orders o
               JOIN customers c ON c.id = o.customer_id
               WHERE o.id = $1"#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(header) = header else {
            return Ok(None);
        };

        let mut items = self.fetch_items_for(&[order_id]).await?;
        let order_items = items.remove(&order_id).unwrap_or_default();
        Ok(Some(header.into_detail(order_items)))
    }

    async fn delete_order(&self, order_id: i64) -> Result<bool, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Items first to avoid orphaned rows under the FK
        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
