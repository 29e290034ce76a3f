//! Books Domain
//!
//! Create, search, fetch and delete books stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Not-found rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Storage document, API model, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_books::{handlers, mongodb::MongoBookRepository, service::BookService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("library");
//!
//! let service = BookService::new(MongoBookRepository::new(&db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BookError, BookResult};
pub use handlers::ApiDoc;
pub use models::{Book, BookDocument, BookQuery, CreateBook, CreatedBook, DeletedBook};
pub use self::mongodb::{BOOK_COLLECTION, MongoBookRepository};
pub use repository::{BookRepository, DisconnectedBookRepository};
pub use service::BookService;
