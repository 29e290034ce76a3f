//! API routes module
//!
//! `routes` is nested under `/api` by `axum_helpers::create_router`; `root_routes`
//! is served at the top level.

pub mod books;
pub mod diagnostics;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/books", books::router(state))
}

/// Routes outside `/api`: the banner and the store diagnostic
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(root::router())
        .merge(diagnostics::router(state.clone()))
}
