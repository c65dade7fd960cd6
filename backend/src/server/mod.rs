//! Server construction and route wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::path::PathBuf;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::documents::{
    delete_document, download_document, list_documents, upload_document,
};
use crate::inbound::http::gallery::{delete_photo, list_photos, serve_photo, upload_photo};
use crate::inbound::http::health::{HealthState, live, ping, ready};
use crate::inbound::http::multipart_form_config;
use crate::inbound::http::plan::{get_action_plan, save_action_plan};
use crate::inbound::http::spa::spa_bundle;
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    static_dir: Option<PathBuf>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        static_dir,
    } = deps;

    let api = web::scope("/api")
        .service(ping)
        .service(list_documents)
        .service(upload_document)
        .service(delete_document)
        .service(get_action_plan)
        .service(save_action_plan)
        .service(upload_photo)
        .service(list_photos)
        .service(delete_photo);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(multipart_form_config())
        .wrap(Trace)
        .service(api)
        .service(download_document)
        .service(serve_photo)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // The bundle mounts at `/`, so it must come after every other route.
    match static_dir {
        Some(dir) => app.service(spa_bundle(&dir)),
        None => app,
    }
}

/// Construct an Actix HTTP server serving the three file-backed stores.
///
/// # Parameters
/// - `health_state`: shared readiness state marked ready once the listener
///   is bound.
/// - `http_state`: store handles shared across workers.
/// - `config`: pre-built [`ServerConfig`] with binding and SPA settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        static_dir,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            static_dir: static_dir.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
