//! This library contains definitions for the API layer.

use rocket::{Build, Rocket};

mod error;
mod routes;

/// Mounts the API on `rocket`. Debug routes are only mounted when `debug_routes` is set.
pub fn register(rocket: Rocket<Build>, debug_routes: bool) -> Rocket<Build> {
    routes::register(rocket, debug_routes)
}
