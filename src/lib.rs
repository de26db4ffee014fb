//! API envelope: uniform JSON response envelopes and service status codes.

pub mod error;
pub mod response;
pub mod service_status;
pub mod status;

pub use error::{EnvelopeError, ServiceError};
pub use response::{
    bad_gateway, bad_request, conflict, created, error, forbidden, gateway_timeout,
    internal_server_error, method_not_allowed, no_content, not_found, not_implemented, success,
    service_unavailable, too_many_requests, unauthorized, unprocessable, ApiResponse,
    EmptyResponse,
};
pub use service_status::{ServiceStatus, ServiceStatusMeta};
pub use status::{HttpStatus, StatusMeta};
