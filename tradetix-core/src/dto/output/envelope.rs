use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

///
/// Body of every successful response
///
#[derive(Serialize)]
pub struct Envelope<T> {
    #[serde(with = "se_status_code")]
    pub status: StatusCode,
    pub message: &'static str,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message,
            data,
        }
    }

    pub fn created(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

///
/// Body of every failed response
///
#[derive(Serialize)]
pub struct ErrorEnvelope {
    #[serde(with = "se_status_code")]
    pub status: StatusCode,
    pub message: String,
    pub error: String,
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

mod se_status_code {
    use axum::http::StatusCode;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(v: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u16(v.as_u16())
    }
}
