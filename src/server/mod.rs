//! Server construction: the route table is built once at process start and
//! every request is handled without shared mutable state.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer};

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new().configure(http::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when parsing the bind address or binding the
/// socket fails.
pub fn create_server(config: &ServerConfig) -> std::io::Result<Server> {
    let bind_addr = config
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;
    let server = HttpServer::new(build_app).bind(bind_addr)?.run();
    Ok(server)
}
