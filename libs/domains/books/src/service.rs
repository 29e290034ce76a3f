//! Book Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{BookError, BookResult};
use crate::models::{Book, BookQuery, CreateBook, CreatedBook};
use crate::repository::BookRepository;

/// Book service orchestrating repository operations
pub struct BookService<R: BookRepository> {
    repository: Arc<R>,
}

impl<R: BookRepository> BookService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new book
    #[instrument(skip(self, input), fields(book_title = %input.title))]
    pub async fn create_book(&self, input: CreateBook) -> BookResult<CreatedBook> {
        let id = self.repository.create(input).await?;
        Ok(CreatedBook { id: id.to_hex() })
    }

    /// List books matching the query
    #[instrument(skip(self))]
    pub async fn list_books(&self, query: BookQuery) -> BookResult<Vec<Book>> {
        self.repository.list(query).await
    }

    /// Get a book by ID
    #[instrument(skip(self))]
    pub async fn get_book(&self, id: ObjectId) -> BookResult<Book> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BookError::NotFound(id))
    }

    /// Delete a book
    #[instrument(skip(self))]
    pub async fn delete_book(&self, id: ObjectId) -> BookResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(BookError::NotFound(id))
        }
    }
}

impl<R: BookRepository> Clone for BookService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
