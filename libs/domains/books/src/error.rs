use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("Book not found: {0}")]
    NotFound(ObjectId),

    #[error("Database not available")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(String),
}

pub type BookResult<T> = Result<T, BookError>;

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(_) => AppError::NotFound("Book not found".to_string()),
            BookError::Unavailable => {
                AppError::DatabaseUnavailable("Database not available".to_string())
            }
            BookError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for BookError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for BookError {
    fn from(err: mongodb::error::Error) -> Self {
        BookError::Database(err.to_string())
    }
}
