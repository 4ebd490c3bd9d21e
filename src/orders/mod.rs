//! Order service: creation/consistency contract, projections, deletion

pub mod service;

pub use service::{CreateOrder, OrderError, OrderService, RequestedItem};
