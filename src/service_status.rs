//! Internal service status registry: domain outcome codes, distinct from HTTP status.

use crate::error::EnvelopeError;
use crate::status::HttpStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    Success,
    ValidationError,
    ProcessingError,
    DataNotFound,
    DuplicateEntry,
    InsufficientPermissions,
    ResourceLocked,
    ConfigurationError,
    ExternalServiceError,
    TimeoutError,
    UnknownError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceStatusMeta {
    pub code: &'static str,
    pub is_error: bool,
}

const fn meta(code: &'static str, is_error: bool) -> ServiceStatusMeta {
    ServiceStatusMeta { code, is_error }
}

static SERVICE_STATUS_REGISTRY: &[(ServiceStatus, ServiceStatusMeta)] = &[
    (ServiceStatus::Success, meta("SUCCESS", false)),
    (ServiceStatus::ValidationError, meta("VALIDATION_ERROR", true)),
    (ServiceStatus::ProcessingError, meta("PROCESSING_ERROR", true)),
    (ServiceStatus::DataNotFound, meta("DATA_NOT_FOUND", true)),
    (ServiceStatus::DuplicateEntry, meta("DUPLICATE_ENTRY", true)),
    (ServiceStatus::InsufficientPermissions, meta("INSUFFICIENT_PERMISSIONS", true)),
    (ServiceStatus::ResourceLocked, meta("RESOURCE_LOCKED", true)),
    (ServiceStatus::ConfigurationError, meta("CONFIGURATION_ERROR", true)),
    (ServiceStatus::ExternalServiceError, meta("EXTERNAL_SERVICE_ERROR", true)),
    (ServiceStatus::TimeoutError, meta("TIMEOUT_ERROR", true)),
    (ServiceStatus::UnknownError, meta("UNKNOWN_ERROR", true)),
];

/// Code reported for a status with no registry entry.
pub const UNDEFINED_CODE: &str = "UNDEFINED";

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 11] = [
        ServiceStatus::Success,
        ServiceStatus::ValidationError,
        ServiceStatus::ProcessingError,
        ServiceStatus::DataNotFound,
        ServiceStatus::DuplicateEntry,
        ServiceStatus::InsufficientPermissions,
        ServiceStatus::ResourceLocked,
        ServiceStatus::ConfigurationError,
        ServiceStatus::ExternalServiceError,
        ServiceStatus::TimeoutError,
        ServiceStatus::UnknownError,
    ];

    pub fn meta(self) -> Option<ServiceStatusMeta> {
        SERVICE_STATUS_REGISTRY
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, meta)| *meta)
    }

    /// Unregistered statuses count as errors.
    pub fn is_error(self) -> bool {
        self.meta().map_or(true, |m| m.is_error)
    }

    /// String code, e.g. `DATA_NOT_FOUND`; `UNDEFINED` when not registered.
    pub fn error_code(self) -> &'static str {
        self.meta().map_or(UNDEFINED_CODE, |m| m.code)
    }

    pub fn from_code(code: &str) -> Option<ServiceStatus> {
        SERVICE_STATUS_REGISTRY
            .iter()
            .find(|(_, meta)| meta.code == code)
            .map(|(status, _)| *status)
    }

    /// HTTP status a handler answers with for this outcome.
    pub fn http_status(self) -> HttpStatus {
        match self {
            ServiceStatus::Success => HttpStatus::Ok,
            ServiceStatus::ValidationError => HttpStatus::BadRequest,
            ServiceStatus::ProcessingError => HttpStatus::Unprocessable,
            ServiceStatus::DataNotFound => HttpStatus::NotFound,
            ServiceStatus::DuplicateEntry | ServiceStatus::ResourceLocked => HttpStatus::Conflict,
            ServiceStatus::InsufficientPermissions => HttpStatus::Forbidden,
            ServiceStatus::ConfigurationError | ServiceStatus::UnknownError => {
                HttpStatus::InternalServerError
            }
            ServiceStatus::ExternalServiceError => HttpStatus::BadGateway,
            ServiceStatus::TimeoutError => HttpStatus::GatewayTimeout,
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceStatus::from_code(s).ok_or_else(|| EnvelopeError::UnknownServiceStatus(s.to_string()))
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_code())
    }
}
