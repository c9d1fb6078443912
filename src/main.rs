mod config;
mod dtos;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use log::info;

use crate::config::AppConfig;
use crate::handlers::route_not_found;
use crate::services::post_service::PostService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let bind_address = config.bind_address();

    // The only copy of the tables; dropped (and lost) when the process exits.
    let state = web::Data::new(PostService::new());
    let allowed_origins = config.allowed_origins.clone();

    let server = HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["content-type", "accept"])
            .max_age(3600);

        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
            .default_service(web::to(route_not_found))
    })
    .bind(&bind_address)
    .with_context(|| format!("failed to bind {}", bind_address))?;

    info!("Server is listening on {}", bind_address);
    server.run().await.context("server terminated with an error")
}
