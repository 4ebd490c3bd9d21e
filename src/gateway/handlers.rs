//! HTTP handlers for the order endpoints

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use std::sync::Arc;

use super::state::AppState;
use super::types::{ApiError, CreateOrderRequest, CreatedOrderDto, HealthResponse, OrderDto};

/// List all orders
///
/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "All orders with customer and items", body = [OrderDto]),
        (status = 500, description = "Persistence failure", body = super::types::ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OrderDto>>, ApiError> {
    let orders = state.service.list_orders().await?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// Get one order by id
///
/// GET /api/v1/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order projection", body = OrderDto),
        (status = 404, description = "No order with that id", body = super::types::ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderDto>, ApiError> {
    tracing::info!(order_id = id, "fetching order");
    let order = state.service.get_order(id).await?;
    Ok(Json(order.into()))
}

/// Create an order
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created; Location points at the new order", body = CreatedOrderDto),
        (status = 400, description = "Unknown product or mismatched supplier", body = super::types::ErrorBody),
        (status = 500, description = "Persistence failure", body = super::types::ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<CreatedOrderDto>), ApiError> {
    let order = state.service.create_order(req.into()).await?;
    let location = format!("/api/v1/orders/{}", order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order.into()),
    ))
}

/// Delete an order and its items
///
/// DELETE /api/v1/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order and its items removed"),
        (status = 404, description = "No order with that id", body = super::types::ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.service.delete_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Health check with a store round trip
///
/// GET /api/v1/health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service and store are up", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = super::types::ErrorBody)
    ),
    tag = "Health"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    state
        .service
        .health_check()
        .await
        .map_err(|_| ApiError::service_unavailable("Store unreachable"))?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}
