//! Store diagnostic endpoint
//!
//! `GET /test` always answers 200 and reports whether the process is up, whether
//! the store variables are present and whether the store answers a read-only probe.

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

use crate::state::AppState;

/// Collection names reported by the probe
const MAX_COLLECTIONS: usize = 10;

/// Probe error text kept in the report
const MAX_ERROR_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiagnosticReport {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    #[schema(example = "✅ Set")]
    pub database_url: String,
    #[schema(example = "✅ Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    pub collections: Vec<String>,
}

fn presence(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

impl DiagnosticReport {
    /// Build the report from the environment flags and the probe outcome.
    ///
    /// `probe` is `None` when there is no store handle at all.
    pub fn new(
        database_url_set: bool,
        database_name_set: bool,
        probe: Option<Result<Vec<String>, String>>,
    ) -> Self {
        let (database, connection_status, collections) = match probe {
            None => ("❌ Not Available".to_string(), "Not Connected", Vec::new()),
            Some(Ok(collections)) => (
                "✅ Connected & Working".to_string(),
                "Connected",
                collections,
            ),
            Some(Err(error)) => {
                let truncated: String = error.chars().take(MAX_ERROR_CHARS).collect();
                (
                    format!("⚠️  Connected but Error: {truncated}"),
                    "Connected",
                    Vec::new(),
                )
            }
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: presence(database_url_set),
            database_name: presence(database_name_set),
            connection_status: connection_status.to_string(),
            collections,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(diagnostics))
        .with_state(state)
}

/// Report process and store connectivity
#[utoipa::path(
    get,
    path = "/test",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Connectivity report", body = DiagnosticReport)
    )
)]
#[instrument(skip(state))]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let probe = match state.db {
        Some(ref db) => Some(
            database::mongodb::list_collections(db, MAX_COLLECTIONS)
                .await
                .map_err(|e| {
                    warn!(error = %e, "Store probe failed");
                    e.to_string()
                }),
        ),
        None => None,
    };

    Json(DiagnosticReport::new(
        state.config.database_url_set,
        state.config.database_name_set,
        probe,
    ))
}
