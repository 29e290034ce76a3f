use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootMessage {
    #[schema(example = "Books API is running")]
    pub message: String,
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Diagnostics",
    responses(
        (status = 200, description = "Service banner", body = RootMessage)
    )
)]
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Books API is running".to_string(),
    })
}
