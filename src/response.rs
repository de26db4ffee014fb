//! Standard response envelope helpers.

use crate::service_status::ServiceStatus;
use crate::status::HttpStatus;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope returned by every handler: `{ success, status, message, data? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[schema(value_type = u16)]
    pub status: HttpStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Envelope without a payload.
pub type EmptyResponse = ApiResponse<()>;

impl<T> ApiResponse<T> {
    /// Base constructor; `success` is derived from the status.
    pub fn new(status: HttpStatus, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: !status.is_error(),
            status,
            message: message.into(),
            data,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl EmptyResponse {
    /// Envelope for a domain outcome, using the outcome's HTTP status.
    pub fn from_service_status(status: ServiceStatus, message: impl Into<String>) -> Self {
        ApiResponse::new(status.http_status(), message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // 204 carries no body.
        if self.status == HttpStatus::NoContent {
            return StatusCode::NO_CONTENT.into_response();
        }
        (self.status.to_status_code(), Json(self)).into_response()
    }
}

pub fn success<T>(data: T, message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse::new(HttpStatus::Ok, message, Some(data))
}

pub fn created<T>(data: T, message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse::new(HttpStatus::Created, message, Some(data))
}

pub fn no_content(message: impl Into<String>) -> EmptyResponse {
    ApiResponse::new(HttpStatus::NoContent, message, None)
}

/// Envelope for any status with no payload.
pub fn error(message: impl Into<String>, status: HttpStatus) -> EmptyResponse {
    ApiResponse::new(status, message, None)
}

/// 400: malformed request, invalid or missing parameters.
pub fn bad_request(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::BadRequest)
}

/// 401: missing or invalid credentials.
pub fn unauthorized(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::Unauthorized)
}

/// 403: authenticated but not allowed to access the resource.
pub fn forbidden(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::Forbidden)
}

pub fn not_found(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::NotFound)
}

pub fn method_not_allowed(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::MethodNotAllowed)
}

/// 409: conflicts with the current state of the resource (e.g. email already taken).
pub fn conflict(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::Conflict)
}

/// 422: well-formed but rejected by business rules.
pub fn unprocessable(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::Unprocessable)
}

pub fn too_many_requests(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::TooManyRequests)
}

pub fn internal_server_error(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::InternalServerError)
}

pub fn not_implemented(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::NotImplemented)
}

/// 502: upstream gateway or proxy failure.
pub fn bad_gateway(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::BadGateway)
}

pub fn service_unavailable(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::ServiceUnavailable)
}

pub fn gateway_timeout(message: impl Into<String>) -> EmptyResponse {
    error(message, HttpStatus::GatewayTimeout)
}
