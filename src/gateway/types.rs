//! Gateway types: request/response DTOs and the unified error response
//!
//! Wire names are camelCase.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::orders::{CreateOrder, OrderError, RequestedItem};
use crate::store::{Order, OrderDetail, OrderItemDetail};

// ============================================================================
// Request DTOs
// ============================================================================

/// Custom deserializer for non-empty strings
fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("string cannot be empty"));
    }
    Ok(s)
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub first_name: String,
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub last_name: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub product_name: String,
    #[serde(deserialize_with = "deserialize_non_empty_string")]
    pub supplier_company_name: String,
    /// Accepted for wire compatibility; the product's current price is
    /// authoritative and this value is never read.
    #[serde(default)]
    pub unit_price: Option<Decimal>,
    pub quantity: i32,
}

impl From<CreateOrderRequest> for CreateOrder {
    fn from(req: CreateOrderRequest) -> Self {
        CreateOrder {
            first_name: req.first_name,
            last_name: req.last_name,
            items: req
                .items
                .into_iter()
                .map(|i| RequestedItem {
                    product_name: i.product_name,
                    supplier_company_name: i.supplier_company_name,
                    quantity: i.quantity,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Order projection returned by list/get.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub first_name: String,
    pub last_name: String,
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_name: String,
    pub supplier_company_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl From<OrderDetail> for OrderDto {
    fn from(detail: OrderDetail) -> Self {
        OrderDto {
            order_date: detail.order.order_date,
            total_amount: detail.order.total_amount,
            first_name: detail.first_name,
            last_name: detail.last_name,
            items: detail.items.into_iter().map(OrderItemDto::from).collect(),
        }
    }
}

impl From<OrderItemDetail> for OrderItemDto {
    fn from(item: OrderItemDetail) -> Self {
        OrderItemDto {
            product_name: item.product_name,
            supplier_company_name: item.supplier_company_name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

/// Body of the 201 response to order creation.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrderDto {
    pub id: i64,
    pub order_date: DateTime<Utc>,
    pub customer_id: i64,
    pub total_amount: Decimal,
}

impl From<Order> for CreatedOrderDto {
    fn from(order: Order) -> Self {
        CreatedOrderDto {
            id: order.id,
            order_date: order.order_date,
            customer_id: order.customer_id,
            total_amount: order.total_amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

// ============================================================================
// Error Responses
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const ORDER_NOT_FOUND: i32 = 4001;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

/// Unified error body: `{code, msg}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Non-zero error code
    #[schema(example = 1001)]
    pub code: i32,
    /// Short message description
    pub msg: String,
}

/// Error half of a handler result; maps to an HTTP status and `ErrorBody`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: i32,
    msg: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: error_codes::INVALID_PARAMETER,
            msg: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: error_codes::ORDER_NOT_FOUND,
            msg: msg.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: error_codes::INTERNAL_ERROR,
            msg: "Internal server error. Please retry later.".to_string(),
        }
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            code: error_codes::SERVICE_UNAVAILABLE,
            msg: msg.into(),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(_) => ApiError::not_found(err.to_string()),
            OrderError::UnknownProduct { .. }
            | OrderError::SupplierMismatch { .. }
            | OrderError::EmptyOrder
            | OrderError::InvalidQuantity { .. } => ApiError::bad_request(err.to_string()),
            OrderError::Store(ref cause) => {
                // Full detail stays server-side; the caller gets an opaque
                // message instructing retry.
                tracing::error!(error = %cause, "persistence failure");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            code: self.code,
            msg: self.msg,
        };
        (self.status, Json(body)).into_response()
    }
}
