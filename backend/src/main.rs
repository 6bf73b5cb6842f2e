//! Backend entry-point: loads configuration and runs the HTTP server.

use std::ffi::OsString;
use std::io;

use actix_web::web;
use mockable::{DefaultClock, DefaultEnv};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cookbook::catalogue_seed::{CatalogueSeedSettings, seed_catalogue_on_startup};
use cookbook::inbound::http::health::HealthState;
use cookbook::inbound::http::session_config::{BuildMode, session_settings_from_env};
use cookbook::server::{AppSettings, CookbookAdapters, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|err| io::Error::other(format!("invalid settings: {err}")))?;
    let pagination = settings.pagination().map_err(io::Error::other)?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    // Seed settings come from the environment only; the command line
    // belongs to `AppSettings`.
    let seed_settings = CatalogueSeedSettings::load_from_iter([OsString::from("cookbook")])
        .map_err(|err| io::Error::other(format!("invalid catalogue seed settings: {err}")))?;

    let adapters = CookbookAdapters::default();
    seed_catalogue_on_startup(&seed_settings, &adapters.recipes, &DefaultClock)
        .await
        .map_err(io::Error::other)?;

    let config = ServerConfig::new(session, settings.bind_addr(), pagination);
    info!(addr = %config.bind_addr(), "starting cookbook server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, &adapters)?;
    server.await
}
