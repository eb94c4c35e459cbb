#![allow(async_fn_in_trait)]

extern crate actix_web;
extern crate anyhow;
extern crate dotenv;
extern crate env_logger;
extern crate log;
extern crate serde;
extern crate sqlx;
extern crate thiserror;

mod config;
mod core;
mod database;
mod error;
mod handlers;
pub mod request;
pub mod response;

use actix_web::web::Data;
use actix_web::HttpServer;
use config::Config;
use database::sqlx::PgSqlxManager;
use sqlx::postgres::PgPoolOptions;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,actix_web=info")).init();
    let config = Config::from_env()?;
    let pool = PgPoolOptions::new().max_connections(config.max_connections).connect(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("listening on {}:{}", config.host, config.port);
    let manager = Data::new(PgSqlxManager::new(pool));
    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(manager.clone())
            .configure(handlers::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;
    Ok(())
}
