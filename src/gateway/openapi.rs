//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::types::{
    CreateOrderRequest, CreatedOrderDto, ErrorBody, HealthResponse, OrderDto, OrderItemDto,
    OrderItemRequest,
};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Gateway API",
        version = "1.0.0",
        description = "Order management REST API over a relational catalog of customers, products and suppliers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::delete_order,
        crate::gateway::handlers::health_check,
    ),
    components(
        schemas(
            CreateOrderRequest,
            OrderItemRequest,
            OrderDto,
            OrderItemDto,
            CreatedOrderDto,
            HealthResponse,
            ErrorBody,
        )
    ),
    tags(
        (name = "Orders", description = "Order management endpoints"),
        (name = "Health", description = "Liveness and store health")
    )
)]
pub struct ApiDoc;
