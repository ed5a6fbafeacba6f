use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod handlers;
pub mod page;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::index))
        .route("/translate", post(handlers::translate))
        .route("/summarize", post(handlers::summarize))
        .route("/health", get(handlers::health))
        .route("/api/languages", get(api::languages))
        .route("/api/translate", post(api::translate))
        .route("/api/summarize", post(api::summarize))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, AppState};
    pub use mts_core::{Error, Result};
}
