//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page in the registry gets a `GET` route serving its full HTML
//! document. The JSON metadata endpoint exposes the same records for clients
//! that build their own head, and `/healthz` answers load balancers.

mod error;
pub mod metadata;
pub mod pages;

pub use error::ApiError;

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub const METADATA_PATH: &str = "/api/metadata";
pub const HEALTHZ_PATH: &str = "/healthz";

/// Paths owned by the service itself; pages may not register them.
pub const RESERVED_PATHS: [&str; 2] = [METADATA_PATH, HEALTHZ_PATH];

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let mut router: Router<AppState> = Router::new();
    for path in state.pages.paths() {
        router = router.route(path, get(pages::render_page));
    }

    router
        .route(METADATA_PATH, get(metadata::get_metadata))
        .route(HEALTHZ_PATH, get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
