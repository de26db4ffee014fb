//! HTTP status registry: numeric code and error flag per status.

use crate::error::EnvelopeError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transport-level status of an API response. Serialized as its numeric HTTP code
/// (`404`), not as the variant's position in the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum HttpStatus {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Unprocessable,
    TooManyRequests,
    InternalServerError,
    NotImplemented,
    BadGateway,
    ServiceUnavailable,
    GatewayTimeout,
    MethodNotAllowed,
}

/// Registry entry for an [`HttpStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMeta {
    pub code: u16,
    pub is_error: bool,
}

const fn meta(code: u16, is_error: bool) -> StatusMeta {
    StatusMeta { code, is_error }
}

static HTTP_STATUS_REGISTRY: &[(HttpStatus, StatusMeta)] = &[
    (HttpStatus::Ok, meta(200, false)),
    (HttpStatus::Created, meta(201, false)),
    (HttpStatus::NoContent, meta(204, false)),
    (HttpStatus::BadRequest, meta(400, true)),
    (HttpStatus::Unauthorized, meta(401, true)),
    (HttpStatus::Forbidden, meta(403, true)),
    (HttpStatus::NotFound, meta(404, true)),
    (HttpStatus::MethodNotAllowed, meta(405, true)),
    (HttpStatus::Conflict, meta(409, true)),
    (HttpStatus::Unprocessable, meta(422, true)),
    (HttpStatus::TooManyRequests, meta(429, true)),
    (HttpStatus::InternalServerError, meta(500, true)),
    (HttpStatus::NotImplemented, meta(501, true)),
    (HttpStatus::BadGateway, meta(502, true)),
    (HttpStatus::ServiceUnavailable, meta(503, true)),
    (HttpStatus::GatewayTimeout, meta(504, true)),
];

/// Code reported for a status with no registry entry.
const UNKNOWN_CODE: u16 = 0;

impl HttpStatus {
    /// Every status, in declaration order.
    pub const ALL: [HttpStatus; 16] = [
        HttpStatus::Ok,
        HttpStatus::Created,
        HttpStatus::NoContent,
        HttpStatus::BadRequest,
        HttpStatus::Unauthorized,
        HttpStatus::Forbidden,
        HttpStatus::NotFound,
        HttpStatus::Conflict,
        HttpStatus::Unprocessable,
        HttpStatus::TooManyRequests,
        HttpStatus::InternalServerError,
        HttpStatus::NotImplemented,
        HttpStatus::BadGateway,
        HttpStatus::ServiceUnavailable,
        HttpStatus::GatewayTimeout,
        HttpStatus::MethodNotAllowed,
    ];

    pub fn meta(self) -> Option<StatusMeta> {
        HTTP_STATUS_REGISTRY
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, meta)| *meta)
    }

    /// Numeric HTTP code, or 0 when the status is not registered.
    pub fn code(self) -> u16 {
        self.meta().map_or(UNKNOWN_CODE, |m| m.code)
    }

    /// Whether this status reports a failure. Unregistered statuses count as errors.
    pub fn is_error(self) -> bool {
        self.meta().map_or(true, |m| m.is_error)
    }

    pub fn from_code(code: u16) -> Option<HttpStatus> {
        HTTP_STATUS_REGISTRY
            .iter()
            .find(|(_, meta)| meta.code == code)
            .map(|(status, _)| *status)
    }

    /// Transport status for axum. Falls back to 500 when the code is not a valid HTTP code.
    pub fn to_status_code(self) -> StatusCode {
        StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> u16 {
        status.code()
    }
}

impl From<HttpStatus> for StatusCode {
    fn from(status: HttpStatus) -> StatusCode {
        status.to_status_code()
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = EnvelopeError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        HttpStatus::from_code(code).ok_or(EnvelopeError::UnknownHttpStatus(code))
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.to_status_code();
        match status.canonical_reason() {
            Some(reason) => write!(f, "{} {}", self.code(), reason),
            None => write!(f, "{}", self.code()),
        }
    }
}
