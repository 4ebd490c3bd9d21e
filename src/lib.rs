//! Order Gateway - order management REST API
//!
//! A small HTTP service over a relational catalog:
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌──────────────┐
//! │ Gateway  │───▶│ Order Service │───▶│  OrderStore  │
//! │ (axum)   │    │ (consistency) │    │ (PostgreSQL) │
//! └──────────┘    └───────────────┘    └──────────────┘
//! ```
//!
//! The gateway exposes list/get/create/delete over orders; the order
//! service owns the creation contract (customer lookup-or-create, product
//! and supplier validation, price snapshotting, total computation); the
//! store is a trait so the service can be exercised without Postgres.

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod store;
