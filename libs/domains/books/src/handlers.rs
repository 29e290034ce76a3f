use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ObjectIdPath, ValidatedJson, ValidatedQuery,
    errors::responses::{
        BadRequestIdentifierResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BookResult;
use crate::models::{Book, BookQuery, CreateBook, CreatedBook, DeletedBook};
use crate::repository::BookRepository;
use crate::service::BookService;

/// OpenAPI documentation for Books API
#[derive(OpenApi)]
#[openapi(
    paths(list_books, create_book, get_book, delete_book),
    components(
        schemas(Book, CreateBook, CreatedBook, DeletedBook),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdentifierResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Books", description = "Book catalogue endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the books router with all HTTP endpoints
pub fn router<R: BookRepository + 'static>(service: BookService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_books).post(create_book))
        .route("/{id}", get(get_book).delete(delete_book))
        .with_state(shared_service)
}

/// List books, optionally filtered by free text and category
#[utoipa::path(
    get,
    path = "",
    tag = "Books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_books<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    ValidatedQuery(query): ValidatedQuery<BookQuery>,
) -> BookResult<Json<Vec<Book>>> {
    let books = service.list_books(query).await?;
    Ok(Json(books))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "",
    tag = "Books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = CreatedBook),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBook>,
) -> BookResult<Json<CreatedBook>> {
    let created = service.create_book(input).await?;
    Ok(Json(created))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Books",
    params(
        ("id" = String, Path, description = "Book ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> BookResult<Json<Book>> {
    let book = service.get_book(id).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Books",
    params(
        ("id" = String, Path, description = "Book ID (24-character hex)")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeletedBook),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_book<R: BookRepository>(
    State(service): State<Arc<BookService<R>>>,
    ObjectIdPath(id): ObjectIdPath,
) -> BookResult<Json<DeletedBook>> {
    service.delete_book(id).await?;
    Ok(Json(DeletedBook::deleted()))
}
