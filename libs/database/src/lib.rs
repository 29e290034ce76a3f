//! Database connectors and utilities
//!
//! Currently a single backend: MongoDB, used as the document store for the books service.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "library");
//! let client = connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod mongodb;
