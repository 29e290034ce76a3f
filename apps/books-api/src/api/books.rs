use axum::Router;
use domain_books::{BookService, DisconnectedBookRepository, MongoBookRepository, handlers};
use tracing::warn;

use crate::state::AppState;

/// Books routes backed by MongoDB, or by a repository that reports the store as
/// unavailable when none is configured.
pub fn router(state: &AppState) -> Router {
    match state.db {
        Some(ref db) => handlers::router(BookService::new(MongoBookRepository::new(db))),
        None => {
            warn!("No document store configured; book endpoints will return errors");
            handlers::router(BookService::new(DisconnectedBookRepository))
        }
    }
}
