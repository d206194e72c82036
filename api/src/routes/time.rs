//! Routes for rendering durations.

use app::pretty_time::{self, PrettyTime, TimeInput};
use rocket::{get, serde::json::Json};
use rocket_okapi::openapi;
use schemars::JsonSchema;
use serde::Serialize;

use crate::error::{self, JsonError, JsonResult};

#[derive(Debug, Serialize, JsonSchema)]
struct PrettyTimeModel {
    /// Whole seconds after truncating the input.
    seconds: i64,
    /// The duration formatted as `HH:MM:SS`.
    pretty: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub(super) struct PrettyTimeResponse {
    pretty_time: PrettyTimeModel,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(super) enum Error {
    /// The input has no leading number.
    NotANumber,
    /// The duration is below zero.
    Negative,
    /// The duration does not fit in 64 bits.
    OutOfRange,
}

impl From<pretty_time::Error> for Error {
    fn from(e: pretty_time::Error) -> Self {
        match e {
            pretty_time::Error::NotANumber => Error::NotANumber,
            pretty_time::Error::Negative(_) => Error::Negative,
            pretty_time::Error::OutOfRange => Error::OutOfRange,
        }
    }
}

fn rejected(raw: &str, e: pretty_time::Error) -> JsonError<Error> {
    log::debug!("rejecting duration {:?}: {}", raw, e);
    error::bad_request(e.into(), e)
}

/// Format a duration in seconds as `HH:MM:SS`. The value is parsed from its leading integer, so
/// fractions and trailing text are dropped. Hours are never truncated.
#[openapi(tag = "Time")]
#[get("/time/pretty?<seconds>")]
pub(super) async fn get_pretty(seconds: Option<String>) -> JsonResult<PrettyTimeResponse, Error> {
    let raw = seconds.unwrap_or_default();
    let total = TimeInput::from(raw.as_str())
        .coerce()
        .map_err(|e| rejected(&raw, e))?;
    let pretty = PrettyTime::from_seconds(total).map_err(|e| rejected(&raw, e))?;
    log::info!("formatted {} seconds as {}", total.0, pretty);
    Ok(Json(PrettyTimeResponse {
        pretty_time: PrettyTimeModel {
            seconds: total.0,
            pretty: pretty.to_string(),
        },
    }))
}
