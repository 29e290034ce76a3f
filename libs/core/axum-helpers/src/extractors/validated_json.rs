//! JSON body extractor that reports failures in the API's error format.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejections render as `400 VALIDATION_ERROR`.
///
/// Missing required fields, wrong field types, malformed JSON and a missing
/// `Content-Type` all reject before the handler runs. The deserializer's message
/// names the offending field.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateBook {
///     title: String,
/// }
///
/// async fn create_book(ValidatedJson(payload): ValidatedJson<CreateBook>) -> String {
///     format!("Creating book: {}", payload.title)
/// }
///
/// let app = Router::new().route("/books", post(create_book));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| AppError::Validation(e.body_text()).into_response())?;

        Ok(ValidatedJson(data))
    }
}
