//! Document identifier path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use mongodb::bson::oid::ObjectId;

/// Extractor for MongoDB `ObjectId` path parameters.
///
/// Parses the single path parameter as a 24-character hex identifier and rejects
/// anything else with `400 INVALID_IDENTIFIER`.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::ObjectIdPath;
///
/// async fn get_book(ObjectIdPath(id): ObjectIdPath) -> String {
///     format!("Book ID: {}", id)
/// }
///
/// let app = Router::new().route("/books/{id}", get(get_book));
/// ```
pub struct ObjectIdPath(pub ObjectId);

impl<S> FromRequestParts<S> for ObjectIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match ObjectId::parse_str(&id) {
            Ok(oid) => Ok(ObjectIdPath(oid)),
            Err(_) => {
                Err(AppError::InvalidIdentifier(format!("Invalid identifier: {}", id))
                    .into_response())
            }
        }
    }
}
