//! Add top-level routes as submodules here.

use rocket::{routes, Build, Rocket};
use rocket_okapi::{
    openapi_get_routes,
    swagger_ui::{make_swagger_ui, DefaultModelRendering, SwaggerUIConfig},
};

mod debug;
mod time;

const PREFIX: &str = "/api";

pub fn register(rocket: Rocket<Build>, debug_routes: bool) -> Rocket<Build> {
    let rocket = rocket.mount(PREFIX, openapi_get_routes![time::get_pretty]);
    let rocket = if debug_routes {
        log::info!("mounting debug routes");
        rocket.mount("/", routes![debug::index]).mount(
            PREFIX,
            routes![
                debug::get_ping,
                debug::post_ping,
                debug::patch_ping,
                debug::delete_ping,
                debug::get_error,
                debug::post_error,
                debug::patch_error,
                debug::delete_error,
            ],
        )
    } else {
        rocket
    };
    mount_swagger(rocket)
}

pub fn mount_swagger(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount(
        format!("{}/swagger", PREFIX),
        make_swagger_ui(&SwaggerUIConfig {
            url: "../openapi.json".to_owned(),
            default_model_rendering: DefaultModelRendering::Model,
            show_extensions: true,
            ..Default::default()
        }),
    )
}
