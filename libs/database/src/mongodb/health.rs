use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::time::Instant;

use super::MongoError;

/// Health check status for MongoDB
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the database is healthy
    pub healthy: bool,
    /// Optional message (e.g., error details)
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check MongoDB health with a `ping` against the admin database, timing the round trip.
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();

    let result = client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

/// List up to `limit` collection names in `db`.
///
/// Read-only; serves as a reachability probe that also exercises the database's
/// permissions.
pub async fn list_collections(db: &Database, limit: usize) -> Result<Vec<String>, MongoError> {
    let mut names = db.list_collection_names().await?;
    names.truncate(limit);
    Ok(names)
}
