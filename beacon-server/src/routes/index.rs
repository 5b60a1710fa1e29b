//! Index endpoint
//!
//! Describes the service: API version and the paths it serves.

use crate::response::ApiSuccess;
use serde::Serialize;

/// Path the index handler is mounted on
pub const INDEX_PATH: &str = "/";

/// Paths advertised in `success.methods`
pub const METHODS: &[&str] = &[INDEX_PATH];

/// Payload nested under the `success` key
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MethodsPayload {
    methods: Vec<&'static str>,
}

impl MethodsPayload {
    pub fn methods(&self) -> &[&'static str] {
        &self.methods
    }
}

/// Body returned by `GET /`
pub type StatusResponse = ApiSuccess<MethodsPayload>;

impl StatusResponse {
    pub fn index() -> Self {
        ApiSuccess::new(MethodsPayload {
            methods: METHODS.to_vec(),
        })
    }
}

/// Built fresh per request
pub async fn index_handler() -> StatusResponse {
    StatusResponse::index()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::API_VERSION;
    use axum::http::StatusCode;

    #[test]
    fn test_status_response_defaults() {
        let message = StatusResponse::index();
        assert_eq!(message.status_code(), StatusCode::OK);
        assert_eq!(message.version(), API_VERSION);
        assert_eq!(message.data().methods(), ["/"]);
    }

    #[test]
    fn test_methods_lists_index() {
        assert!(!METHODS.is_empty());
        assert!(METHODS.contains(&INDEX_PATH));
    }

    #[test]
    fn test_wire_shape() {
        let body = serde_json::to_string(&StatusResponse::index()).unwrap();
        assert_eq!(
            body,
            r#"{"status":200,"v":"v0.1 DEV","success":{"methods":["/"]}}"#
        );
    }
}
