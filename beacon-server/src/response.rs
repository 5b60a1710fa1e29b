//! API response envelope
//!
//! Every successful reply has the shape `{"status": .., "v": .., "success": {..}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

/// Version string reported under the `v` key
pub const API_VERSION: &str = "v0.1 DEV";

/// Success envelope wrapping an endpoint payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiSuccess<T> {
    #[serde(serialize_with = "serialize_status")]
    status: StatusCode,
    #[serde(rename = "v")]
    version: &'static str,
    #[serde(rename = "success")]
    data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            version: API_VERSION,
            data,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

fn serialize_status<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}
