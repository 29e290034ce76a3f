//! MongoDB implementation of BookRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::FindOptions,
};
use tracing::instrument;

use crate::error::{BookError, BookResult};
use crate::models::{Book, BookDocument, BookQuery, CreateBook};
use crate::repository::BookRepository;

/// Collection the books live in
pub const BOOK_COLLECTION: &str = "book";

/// MongoDB implementation of the BookRepository
#[derive(Clone)]
pub struct MongoBookRepository {
    collection: Collection<BookDocument>,
}

impl MongoBookRepository {
    /// Create a repository over the `book` collection of `db`
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoBookRepository::new(&client.database("library"));
    /// ```
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, BOOK_COLLECTION)
    }

    /// Create a repository over a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<BookDocument>(collection_name),
        }
    }

    /// Build a MongoDB filter document from a BookQuery
    ///
    /// Terms are matched as literal, case-insensitive substrings. Top-level keys
    /// combine with AND.
    pub fn build_filter(query: &BookQuery) -> Document {
        let mut filter = doc! {};

        if let Some(category) = query.category_term() {
            filter.insert("category", contains_ignore_case(category));
        }

        if let Some(term) = query.search_term() {
            filter.insert(
                "$or",
                vec![
                    doc! { "title": contains_ignore_case(term) },
                    doc! { "author": contains_ignore_case(term) },
                    doc! { "description": contains_ignore_case(term) },
                ],
            );
        }

        filter
    }
}

fn contains_ignore_case(term: &str) -> Document {
    doc! { "$regex": regex::escape(term), "$options": "i" }
}

#[async_trait]
impl BookRepository for MongoBookRepository {
    #[instrument(skip(self, input), fields(book_title = %input.title))]
    async fn create(&self, input: CreateBook) -> BookResult<ObjectId> {
        let document = BookDocument::new(input);

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            BookError::Database(format!(
                "insert returned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(book_id = %id, "Book created successfully");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: BookQuery) -> BookResult<Vec<Book>> {
        let filter = Self::build_filter(&query);

        let options = FindOptions::builder().limit(query.store_limit()).build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let documents: Vec<BookDocument> = cursor.try_collect().await?;

        Ok(documents.into_iter().map(Book::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> BookResult<Option<Book>> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Book::from))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> BookResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count == 0 {
            return Ok(false);
        }

        tracing::info!(book_id = %id, "Book deleted successfully");
        Ok(true)
    }
}
