use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::{BookError, BookResult};
use crate::models::{Book, BookQuery, CreateBook};

/// Repository trait for Book persistence
///
/// Implementations can use different storage backends; the service only relies on
/// this interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert a new book and return its store-assigned identifier
    async fn create(&self, input: CreateBook) -> BookResult<ObjectId>;

    /// List books matching the query, in natural store order
    async fn list(&self, query: BookQuery) -> BookResult<Vec<Book>>;

    /// Get a book by ID
    async fn get_by_id(&self, id: ObjectId) -> BookResult<Option<Book>>;

    /// Delete a book by ID, returning whether a document was removed
    async fn delete(&self, id: ObjectId) -> BookResult<bool>;
}

/// Repository used when no document store is configured.
///
/// Every operation fails with [`BookError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DisconnectedBookRepository;

#[async_trait]
impl BookRepository for DisconnectedBookRepository {
    async fn create(&self, _input: CreateBook) -> BookResult<ObjectId> {
        Err(BookError::Unavailable)
    }

    async fn list(&self, _query: BookQuery) -> BookResult<Vec<Book>> {
        Err(BookError::Unavailable)
    }

    async fn get_by_id(&self, _id: ObjectId) -> BookResult<Option<Book>> {
        Err(BookError::Unavailable)
    }

    async fn delete(&self, _id: ObjectId) -> BookResult<bool> {
        Err(BookError::Unavailable)
    }
}
