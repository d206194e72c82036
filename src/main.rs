use rocket::{Build, Rocket};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Config {
    #[serde(default = "debug_routes_default")]
    debug_routes: bool,
}

fn debug_routes_default() -> bool {
    cfg!(debug_assertions)
}

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let _ = build_server()?.launch().await?;
    Ok(())
}

fn build_server() -> anyhow::Result<Rocket<Build>> {
    let rocket = Rocket::build();
    let config: Config = rocket.figment().extract()?;
    log::info!("starting with {:?}", config);

    Ok(api::register(rocket, config.debug_routes))
}
