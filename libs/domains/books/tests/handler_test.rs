//! Handler tests for the Books domain
//!
//! These drive the books router directly with `oneshot`, backed by an in-memory
//! repository, and check:
//! - Request deserialization and the 400 paths
//! - Response bodies and status codes
//! - Search, category and limit semantics as seen over HTTP

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_books::{
    Book, BookDocument, BookQuery, BookRepository, BookResult, BookService, CreateBook,
    CreatedBook, DisconnectedBookRepository, MongoBookRepository, handlers,
};
use http_body_util::BodyExt;
use mongodb::bson::{Document, doc, oid::ObjectId};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

/// Repository keeping documents in insertion order, matching terms the way the
/// MongoDB filter does (case-insensitive literal substrings).
#[derive(Default)]
struct InMemoryBookRepository {
    books: Mutex<Vec<BookDocument>>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(doc: &BookDocument, query: &BookQuery) -> bool {
    let category_ok = query
        .category_term()
        .is_none_or(|c| contains_ignore_case(&doc.category, c));
    let search_ok = query.search_term().is_none_or(|q| {
        contains_ignore_case(&doc.title, q)
            || contains_ignore_case(&doc.author, q)
            || doc
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, q))
    });
    category_ok && search_ok
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, input: CreateBook) -> BookResult<ObjectId> {
        let id = ObjectId::new();
        let mut doc = BookDocument::new(input);
        doc.id = Some(id);
        self.books.lock().unwrap().push(doc);
        Ok(id)
    }

    async fn list(&self, query: BookQuery) -> BookResult<Vec<Book>> {
        let limit = if query.limit == 0 {
            usize::MAX
        } else {
            query.limit as usize
        };
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .filter(|doc| matches(doc, &query))
            .take(limit)
            .cloned()
            .map(Book::from)
            .collect())
    }

    async fn get_by_id(&self, id: ObjectId) -> BookResult<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .iter()
            .find(|doc| doc.id == Some(id))
            .cloned()
            .map(Book::from))
    }

    async fn delete(&self, id: ObjectId) -> BookResult<bool> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|doc| doc.id != Some(id));
        Ok(books.len() < before)
    }
}

/// Repository that records the MongoDB filter each list request would run
#[derive(Clone, Default)]
struct FilterRecordingRepository {
    filters: Arc<Mutex<Vec<Document>>>,
}

#[async_trait]
impl BookRepository for FilterRecordingRepository {
    async fn create(&self, _input: CreateBook) -> BookResult<ObjectId> {
        Ok(ObjectId::new())
    }

    async fn list(&self, query: BookQuery) -> BookResult<Vec<Book>> {
        self.filters
            .lock()
            .unwrap()
            .push(MongoBookRepository::build_filter(&query));
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: ObjectId) -> BookResult<Option<Book>> {
        Ok(None)
    }

    async fn delete(&self, _id: ObjectId) -> BookResult<bool> {
        Ok(false)
    }
}

fn app() -> Router {
    handlers::router(BookService::new(InMemoryBookRepository::default()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> String {
    let response = app.clone().oneshot(post_json(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: CreatedBook = json_body(response.into_body()).await;
    created.id
}

async fn list(app: &Router, uri: &str) -> Vec<Book> {
    let response = app.clone().oneshot(get(uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response.into_body()).await
}

async fn seed_catalogue(app: &Router) {
    for (title, author, category, description) in [
        ("Dune", "Frank Herbert", "Science Fiction", "Desert planet politics"),
        ("Emma", "Jane Austen", "Classic", "A matchmaker in Highbury"),
        ("Neuromancer", "William Gibson", "science fiction", "Cyberspace heist"),
        ("The Hobbit", "J. R. R. Tolkien", "Fantasy", "There and back again"),
        ("Foundation", "Isaac Asimov", "Sci-Fi", "Psychohistory and the dune of time"),
    ] {
        create(
            app,
            json!({
                "title": title,
                "author": author,
                "category": category,
                "description": description
            }),
        )
        .await;
    }
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = app();
    let id = create(
        &app,
        json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "category": "Science Fiction",
            "text_summary": "Spice must flow.",
            "cover_image_url": "https://img.example/dune.jpg",
            "audio_summary_url": "https://audio.example/dune.mp3"
        }),
    )
    .await;
    assert_eq!(id.len(), 24);

    let response = app.clone().oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let book: Book = json_body(response.into_body()).await;
    assert_eq!(book.id, id);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
    assert_eq!(book.category, "Science Fiction");
    assert_eq!(book.text_summary.as_deref(), Some("Spice must flow."));
    assert_eq!(
        book.audio_summary_url.as_deref(),
        Some("https://audio.example/dune.mp3")
    );
    assert!(book.description.is_none());
    assert!(book.created_at.is_some());
}

#[tokio::test]
async fn test_create_missing_required_field_returns_400() {
    let response = app()
        .oneshot(post_json(json!({ "title": "Dune", "author": "Frank Herbert" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_wrong_type_returns_400() {
    let response = app()
        .oneshot(post_json(json!({
            "title": 7,
            "author": "Frank Herbert",
            "category": "Science Fiction"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_get_returns_404() {
    let app = app();
    let id = create(
        &app,
        json!({ "title": "Emma", "author": "Jane Austen", "category": "Classic" }),
    )
    .await;

    let response = app.clone().oneshot(delete(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "status": "deleted" }));

    let response = app.clone().oneshot(get(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(delete(&format!("/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_id_is_never_success() {
    let app = app();
    for uri in ["/not-an-id", "/123", "/507f1f77bcf86cd79943901z"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "GET {uri}");

        let response = app.clone().oneshot(delete(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "DELETE {uri}");
    }
}

#[tokio::test]
async fn test_well_formed_unknown_id_returns_404() {
    let unknown = TestDataBuilder::from_test_name("unknown_id").hex_id();
    let response = app()
        .oneshot(get(&format!("/{unknown}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Book not found");
}

#[tokio::test]
async fn test_category_filter_is_case_insensitive_substring() {
    let app = app();
    seed_catalogue(&app).await;

    let books = list(&app, "/?category=SCIENCE").await;
    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Neuromancer"]);

    let books = list(&app, "/?category=sci").await;
    assert_eq!(books.len(), 3);
}

#[tokio::test]
async fn test_search_spans_title_author_and_description() {
    let app = app();
    seed_catalogue(&app).await;

    // title "Dune" and Foundation's description
    let books = list(&app, "/?q=DUNE").await;
    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Dune", "Foundation"]);

    // author only
    let books = list(&app, "/?q=austen").await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Emma");
}

#[tokio::test]
async fn test_search_and_category_combine_with_and() {
    let app = app();
    seed_catalogue(&app).await;

    let books = list(&app, "/?q=dune&category=sci-fi").await;
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Foundation");
}

#[tokio::test]
async fn test_empty_terms_are_ignored() {
    let app = app();
    seed_catalogue(&app).await;

    assert_eq!(list(&app, "/?q=&category=").await.len(), 5);
}

#[tokio::test]
async fn test_query_terms_reach_store_as_escaped_regex() {
    let repository = FilterRecordingRepository::default();
    let app = handlers::router(BookService::new(repository.clone()));

    // c++ and (2nd ed.) percent-encoded; a bare '+' would decode to a space
    let books = list(&app, "/?q=c%2B%2B&category=%282nd%20ed.%29").await;
    assert!(books.is_empty());
    list(&app, "/?q=.*").await;

    let filters = repository.filters.lock().unwrap();
    let term = doc! { "$regex": r"c\+\+", "$options": "i" };
    assert_eq!(
        filters[0],
        doc! {
            "category": { "$regex": r"\(2nd ed\.\)", "$options": "i" },
            "$or": [
                { "title": term.clone() },
                { "author": term.clone() },
                { "description": term }
            ]
        }
    );

    let wildcard = doc! { "$regex": r"\.\*", "$options": "i" };
    assert_eq!(
        filters[1],
        doc! {
            "$or": [
                { "title": wildcard.clone() },
                { "author": wildcard.clone() },
                { "description": wildcard }
            ]
        }
    );
}

#[tokio::test]
async fn test_limit_caps_results() {
    let app = app();
    seed_catalogue(&app).await;

    assert_eq!(list(&app, "/?limit=2").await.len(), 2);
    assert_eq!(list(&app, "/?limit=0").await.len(), 5);
    assert_eq!(list(&app, "/").await.len(), 5);
}

#[tokio::test]
async fn test_invalid_limit_returns_400() {
    let app = app();
    for uri in ["/?limit=abc", "/?limit=-1"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn test_disconnected_store_returns_500() {
    let app = handlers::router(BookService::new(DisconnectedBookRepository));

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "DATABASE_UNAVAILABLE");

    let response = app
        .oneshot(post_json(json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "category": "Science Fiction"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
