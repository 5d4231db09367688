mod db;
mod errors;
mod handlers;
mod models;
mod service;
mod store;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use crate::service::EmployeeService;
use crate::store::PgEmployeeStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool and bootstrap the schema
    let pool = db::create_pool().await;
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize the database schema");

    // Explicit wiring: the handlers hold the service, the service holds the store
    let store = Arc::new(PgEmployeeStore::new(pool));
    let employee_service = web::Data::new(EmployeeService::new(store));

    info!("Starting server at 127.0.0.1:8080");

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(employee_service.clone())
            .configure(handlers::employee::routes)
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
