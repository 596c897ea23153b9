#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::{api_v1_filters, api_v1_validate};
#[cfg(feature = "server")]
use crate::routes::main::health;

pub mod domain;
pub mod dto;
pub mod forms;
pub mod json;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(health)
            .service(
                web::scope("/api")
                    .service(api_v1_filters)
                    .service(api_v1_validate),
            )
    })
    .bind(bind_address)?
    .run()
    .await
}
