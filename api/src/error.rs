use std::fmt::Display;

use rocket::{http::Status, serde::json::Json};
use schemars::JsonSchema;
use serde::Serialize;

/// Error envelope shared by every JSON route.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Envelope<E: Serialize> {
    pub error: ErrorBody<E>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorBody<E: Serialize> {
    /// HTTP status code, repeated from the response.
    pub code: u16,
    pub description: String,
    pub reason: Option<&'static str>,
    /// Route-specific machine-readable status.
    pub status: E,
}

pub type JsonError<E> = (Status, Json<Envelope<E>>);

pub type JsonResult<T, E> = Result<Json<T>, JsonError<E>>;

pub fn reject<E: Serialize>(
    http_status: Status,
    status: E,
    description: impl Display,
) -> JsonError<E> {
    (
        http_status,
        Json(Envelope {
            error: ErrorBody {
                code: http_status.code,
                description: description.to_string(),
                reason: http_status.reason(),
                status,
            },
        }),
    )
}

pub fn bad_request<E: Serialize>(status: E, description: impl Display) -> JsonError<E> {
    reject(Status::BadRequest, status, description)
}

pub fn internal_server_error<E: Serialize>(
    status: E,
    description: impl Display,
) -> JsonError<E> {
    reject(Status::InternalServerError, status, description)
}
