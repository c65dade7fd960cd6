//! Backend entry point: opens the file-backed stores and wires the REST
//! endpoints.

use std::path::Path;

use actix_web::web;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use backend::server::{ServerConfig, ServerSettings, create_server};
use backend::store::{DocumentStore, GalleryStore, PlanStore};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(std::io::Error::other)?;
    let data_dir = settings.data_dir();

    let documents = DocumentStore::open(data_dir.join("downloads"))?;
    let plan = PlanStore::open(&data_dir)?;
    let gallery = GalleryStore::open(&data_dir)?;

    let http_state = web::Data::new(HttpState::new(documents, plan, gallery));
    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr())
        .with_static_dir(settings.static_dir().map(Path::to_path_buf));

    info!(
        addr = %config.bind_addr(),
        data_dir = %data_dir.display(),
        "mural backend starting"
    );
    create_server(health_state, http_state, config)?.await
}
