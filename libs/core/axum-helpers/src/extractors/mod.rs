//! Custom extractors for Axum handlers.
//!
//! Both extractors reject with [`AppError`](crate::errors::AppError) so malformed
//! requests share the API's error body.

pub mod object_id_path;
pub mod validated_json;
pub mod validated_query;

pub use object_id_path::ObjectIdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
