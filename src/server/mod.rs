//! This module holds the server definition

use std::net::SocketAddr;

use actix_toolbox::tb_middleware::{setup_logging_mw, LoggingMiddlewareConfig};
use actix_web::http::StatusCode;
use actix_web::middleware::{Compress, ErrorHandlers};
use actix_web::web::{scope, Data, PathConfig, PayloadConfig, QueryConfig};
use actix_web::{App, HttpServer};
use log::info;
use rorm::Database;
use tokio::sync::Mutex;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::graph::SeedOptions;
use crate::server::error::StartServerError;
use crate::server::handler::{
    get_database, get_user, reset_database, search_users, seed_database, version,
};
use crate::server::middleware::{handle_not_found, path_extractor_error, query_extractor_error};
use crate::server::swagger::ApiDoc;

pub mod error;
pub mod handler;
pub mod middleware;
pub mod swagger;

/// Held while the database is seeded or reset.
///
/// Only one of these operations may run at a time.
pub type MaintenanceLock = Data<Mutex<()>>;

/// The options the seed endpoint uses
pub type SeedSettings = Data<SeedOptions>;

/// Start the couchgraph server
///
/// **Parameter**:
/// - `config`: Reference to a [Config] struct
/// - `db`: [Database]
pub async fn start_server(config: &Config, db: Database) -> Result<(), StartServerError> {
    let s_addr = SocketAddr::new(config.server.listen_address, config.server.listen_port);

    info!("Starting to listen on {}", s_addr);

    let maintenance_lock: MaintenanceLock = Data::new(Mutex::new(()));
    let seed_settings: SeedSettings = Data::new(config.seed);

    HttpServer::new(move || {
        App::new()
            .app_data(PayloadConfig::default())
            .app_data(PathConfig::default().error_handler(path_extractor_error))
            .app_data(QueryConfig::default().error_handler(query_extractor_error))
            .app_data(Data::new(db.clone()))
            .app_data(seed_settings.clone())
            .app_data(maintenance_lock.clone())
            .wrap(setup_logging_mw(LoggingMiddlewareConfig::default()))
            .wrap(Compress::default())
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, handle_not_found))
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()))
            .service(version)
            .service(
                scope("/api/v1")
                    .service(search_users)
                    .service(get_user)
                    .service(get_database)
                    .service(seed_database)
                    .service(reset_database),
            )
    })
    .bind(s_addr)
    .map_err(|source| StartServerError::Bind {
        address: s_addr,
        source,
    })?
    .run()
    .await?;

    Ok(())
}
