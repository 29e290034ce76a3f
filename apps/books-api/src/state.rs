//! Application state management.
//!
//! This module defines the shared application state passed to the root-level
//! handlers. The books router carries its own service state.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned for each handler; the MongoDB handles are cheap clones sharing one
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client, absent when no store is configured
    pub mongo_client: Option<Client>,
    /// MongoDB database instance, absent when no store is configured
    pub db: Option<Database>,
}
