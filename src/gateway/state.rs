use crate::orders::OrderService;

/// Gateway application state (shared across handlers)
#[derive(Clone)]
pub struct AppState {
    /// Request-scoped order service over the relational store
    pub service: OrderService,
}

impl AppState {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }
}
