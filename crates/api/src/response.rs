//! Shared response envelope types for API handlers.
//!
//! CRUD endpoints wrap payloads in a `{ "data": ... }` envelope via
//! [`DataResponse`]; the millennium lifecycle endpoints answer with a
//! `{ "status": ..., "message": ... }` body via [`StatusResponse`].

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "status": "success", "message": ... }` envelope for lifecycle
/// operations that have no payload beyond an acknowledgment.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }
}
