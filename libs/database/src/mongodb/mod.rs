//! MongoDB database connector and utilities
//!
//! Provides connection management and MongoDB-specific helpers.

mod config;
mod connector;
mod health;

pub use config::{DATABASE_NAME_ENV, DATABASE_URL_ENV, MongoConfig};
pub use connector::{MongoError, connect_from_config, disconnect};
pub use health::{HealthStatus, check_health_detailed, list_collections};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
