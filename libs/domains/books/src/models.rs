use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Stored document shape in the `book` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDocument {
    /// Assigned by the store on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub text_summary: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub audio_summary_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<bson::DateTime>,
}

impl BookDocument {
    /// Build a new document from a create request, stamping creation metadata.
    pub fn new(input: CreateBook) -> Self {
        let now = bson::DateTime::now();
        Self {
            id: None,
            title: input.title,
            author: input.author,
            category: input.category,
            description: input.description,
            text_summary: input.text_summary,
            cover_image_url: input.cover_image_url,
            audio_summary_url: input.audio_summary_url,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Book as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// 24-character hex identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub description: Option<String>,
    pub text_summary: Option<String>,
    pub cover_image_url: Option<String>,
    pub audio_summary_url: Option<String>,
    /// Absent on documents written without creation metadata
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn to_chrono(dt: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(dt.timestamp_millis())
}

impl From<BookDocument> for Book {
    fn from(doc: BookDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            title: doc.title,
            author: doc.author,
            category: doc.category,
            description: doc.description,
            text_summary: doc.text_summary,
            cover_image_url: doc.cover_image_url,
            audio_summary_url: doc.audio_summary_url,
            created_at: doc.created_at.and_then(to_chrono),
            updated_at: doc.updated_at.and_then(to_chrono),
        }
    }
}

/// DTO for creating a new book
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct CreateBook {
    #[schema(example = "Dune")]
    pub title: String,
    #[schema(example = "Frank Herbert")]
    pub author: String,
    #[schema(example = "Science Fiction")]
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub text_summary: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub audio_summary_url: Option<String>,
}

/// Response body for a successful create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedBook {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
}

/// Response body for a successful delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedBook {
    #[schema(example = "deleted")]
    pub status: String,
}

impl DeletedBook {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".to_string(),
        }
    }
}

/// Query parameters for listing books
#[derive(Debug, Clone, PartialEq, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Case-insensitive substring matched against title, author and description
    pub q: Option<String>,
    /// Case-insensitive substring matched against category
    pub category: Option<String>,
    /// Maximum number of results; 0 means no limit
    #[serde(default = "default_limit")]
    #[param(default = 100, minimum = 0)]
    pub limit: u64,
}

pub const DEFAULT_LIMIT: u64 = 100;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl BookQuery {
    /// The free-text term, if one was given and is non-empty.
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().filter(|s| !s.is_empty())
    }

    /// The category term, if one was given and is non-empty.
    pub fn category_term(&self) -> Option<&str> {
        self.category.as_deref().filter(|s| !s.is_empty())
    }

    /// The store's limit value, saturating at `i64::MAX`.
    pub fn store_limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}
