// src/lib.rs

use axum::{routing::get, Router};
use sqlx::{Pool, Postgres};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod sections;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Full HTTP surface with middleware attached.
pub fn router(state: AppState) -> Router {
    // Read-only API, so any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // health
        .route("/health", get(routes::health::health))
        .route("/health/db", get(routes::health::health_db))
        // navigation + section views
        .route("/api/v1/sections", get(routes::sections::list_sections))
        .route("/api/v1/sections/:slug", get(routes::sections::get_section))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
