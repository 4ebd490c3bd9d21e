//! In-memory order store for tests
//!
//! Implements the same contract as `PgStore` over plain vectors so the
//! service and router can be exercised without a database.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Mutex;

use super::models::{
    Customer, CustomerRef, NewOrder, Order, OrderDetail, OrderItem, OrderItemDetail, Product,
    Supplier,
};
use super::{OrderStore, StoreError};

#[derive(Default)]
struct Inner {
    customers: Vec<Customer>,
    suppliers: Vec<Supplier>,
    products: Vec<Product>,
    orders: Vec<Order>,
    items: Vec<OrderItem>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Fixture helpers
    // ------------------------------------------------------------------

    pub fn add_supplier(&self, company_name: &str) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.suppliers.push(Supplier {
            id,
            company_name: company_name.to_string(),
            contact_name: "Contact".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            phone: "1234567890".to_string(),
            fax: None,
        });
        id
    }

    pub fn add_product(&self, product_name: &str, supplier_id: i64, unit_price: Decimal) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.products.push(Product {
            id,
            product_name: product_name.to_string(),
            supplier_id,
            unit_price,
            package: None,
        });
        id
    }

    pub fn add_customer(&self, first_name: &str, last_name: &str) -> i64 {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        inner.customers.push(Customer {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            city: "Paris".to_string(),
            country: "France".to_string(),
            phone: "5551234567".to_string(),
        });
        id
    }

    pub fn set_product_price(&self, product_id: i64, unit_price: Decimal) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(p) = inner.products.iter_mut().find(|p| p.id == product_id) {
            p.unit_price = unit_price;
        }
    }

    pub fn customer_count(&self) -> usize {
        self.inner.lock().unwrap().customers.len()
    }

    pub fn order_count(&self) -> usize {
        self.inner.lock().unwrap().orders.len()
    }

    pub fn item_count(&self) -> usize {
        self.inner.lock().unwrap().items.len()
    }

    pub fn customer(&self, id: i64) -> Option<Customer> {
        self.inner
            .lock()
            .unwrap()
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    fn detail(&self, inner: &Inner, order: &Order) -> OrderDetail {
        let customer = inner
            .customers
            .iter()
            .find(|c| c.id == order.customer_id)
            .expect("order references existing customer");
        let items = inner
            .items
            .iter()
            .filter(|i| i.order_id == order.id)
            .map(|i| {
                let product = inner
                    .products
                    .iter()
                    .find(|p| p.id == i.product_id)
                    .expect("item references existing product");
                let supplier = inner
                    .suppliers
                    .iter()
                    .find(|s| s.id == product.supplier_id)
                    .expect("product references existing supplier");
                OrderItemDetail {
                    order_id: i.order_id,
                    product_name: product.product_name.clone(),
                    supplier_company_name: supplier.company_name.clone(),
                    unit_price: i.unit_price,
                    quantity: i.quantity,
                }
            })
            .collect();
        OrderDetail {
            order: order.clone(),
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            items,
        }
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn find_customer_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .customers
            .iter()
            .find(|c| c.first_name == first_name && c.last_name == last_name)
            .cloned())
    }

    async fn find_product_by_name(
        &self,
        product_name: &str,
    ) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .find(|p| p.product_name == product_name)
            .cloned())
    }

    async fn find_supplier_for_product(
        &self,
        supplier_id: i64,
        company_name: &str,
    ) -> Result<Option<Supplier>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .suppliers
            .iter()
            .find(|s| s.id == supplier_id && s.company_name == company_name)
            .cloned())
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        let customer_id = match order.customer {
            CustomerRef::Existing(id) => id,
            CustomerRef::New(c) => {
                let id = inner.next_id();
                inner.customers.push(Customer {
                    id,
                    first_name: c.first_name,
                    last_name: c.last_name,
                    city: c.city,
                    country: c.country,
                    phone: c.phone,
                });
                id
            }
        };

        let order_id = inner.next_id();
        let stored = Order {
            id: order_id,
            order_date: order.order_date,
            customer_id,
            total_amount: order.total_amount,
        };
        inner.orders.push(stored.clone());

        for item in order.items {
            let id = inner.next_id();
            inner.items.push(OrderItem {
                id,
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price: item.unit_price,
            });
        }

        Ok(stored)
    }

    async fn fetch_orders(&self) -> Result<Vec<OrderDetail>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.orders.iter().map(|o| self.detail(&inner, o)).collect())
    }

    async fn fetch_order(&self, order_id: i64) -> Result<Option<OrderDetail>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .map(|o| self.detail(&inner, o)))
    }

    async fn delete_order(&self, order_id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.orders.iter().any(|o| o.id == order_id) {
            return Ok(false);
        }
        inner.items.retain(|i| i.order_id != order_id);
        inner.orders.retain(|o| o.id != order_id);
        Ok(true)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
