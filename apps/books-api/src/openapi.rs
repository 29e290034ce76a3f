//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::{diagnostics, root};

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Books API",
        version = "0.1.0",
        description = "Book catalogue with text and audio summaries, backed by MongoDB"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(root::root, diagnostics::diagnostics),
    components(schemas(root::RootMessage, diagnostics::DiagnosticReport)),
    nest(
        (path = "/api/books", api = domain_books::ApiDoc)
    ),
    tags(
        (name = "Books", description = "Book catalogue endpoints (MongoDB)"),
        (name = "Diagnostics", description = "Service and store status")
    )
)]
pub struct ApiDoc;
