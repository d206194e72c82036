//! Debug routes for checking that the API is up and that failures surface.

use rocket::{delete, get, http::Method, patch, post};
use serde::Serialize;

use crate::error::{self, JsonError};

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum Error {
    /// Raised on purpose by the debug error route.
    DebugError,
}

const DEBUG_ERROR: &str = "this is a debug error, do not be alarmed";

#[get("/")]
pub(super) fn index() -> &'static str {
    "TBOS"
}

fn pong(method: Method) -> String {
    log::info!("debug ping via {}", method);
    format!("{} @ pong", method)
}

#[get("/debug/ping")]
pub(super) fn get_ping() -> String {
    pong(Method::Get)
}

#[post("/debug/ping")]
pub(super) fn post_ping() -> String {
    pong(Method::Post)
}

#[patch("/debug/ping")]
pub(super) fn patch_ping() -> String {
    pong(Method::Patch)
}

#[delete("/debug/ping")]
pub(super) fn delete_ping() -> String {
    pong(Method::Delete)
}

fn fail(method: Method) -> JsonError<Error> {
    log::error!("debug error via {}: {}", method, DEBUG_ERROR);
    error::internal_server_error(Error::DebugError, DEBUG_ERROR)
}

#[get("/debug/error")]
pub(super) fn get_error() -> JsonError<Error> {
    fail(Method::Get)
}

#[post("/debug/error")]
pub(super) fn post_error() -> JsonError<Error> {
    fail(Method::Post)
}

#[patch("/debug/error")]
pub(super) fn patch_error() -> JsonError<Error> {
    fail(Method::Patch)
}

#[delete("/debug/error")]
pub(super) fn delete_error() -> JsonError<Error> {
    fail(Method::Delete)
}
