//! Server construction and middleware wiring.

mod config;
mod settings;
mod state_builders;

pub use config::ServerConfig;
pub use settings::AppSettings;
pub use state_builders::{CookbookAdapters, build_http_state};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::authors::{
    create_draft, dashboard, delete_draft, get_draft, login, logout, register, update_draft,
};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::recipes::{category, detail, home, search};
use crate::inbound::http::session_config::SessionSettings;
use crate::inbound::http::state::HttpState;

/// Assemble the application: trace middleware, the cookie-session `/api/v1`
/// scope, health endpoints and (in debug builds) Swagger UI at `/docs`.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionSettings,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // `search` and `category` must precede `detail`, whose `{id}` segment
    // would otherwise capture them.
    let api = web::scope("/api/v1")
        .wrap(session.middleware())
        .service(register)
        .service(login)
        .service(logout)
        .service(dashboard)
        .service(create_draft)
        .service(get_draft)
        .service(update_draft)
        .service(delete_draft)
        .service(home)
        .service(search)
        .service(category)
        .service(detail);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Bind and start the server on `adapters`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    adapters: &CookbookAdapters,
) -> std::io::Result<Server> {
    let ServerConfig {
        session,
        bind_addr,
        pagination,
    } = config;
    let http_state = web::Data::new(build_http_state(
        adapters,
        pagination,
        Arc::new(DefaultClock),
    ));

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(
            server_health_state.clone(),
            http_state.clone(),
            session.clone(),
        )
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
