//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, library, shelf};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Shelf
        shelf::list_books,
        shelf::get_book,
        shelf::books_by_category,
        shelf::books_by_author,
        shelf::books_of_author,
        shelf::books_by_author_and_category,
        shelf::create_book,
        shelf::update_book,
        shelf::replace_book,
        shelf::patch_book,
        shelf::delete_book,
        // Library
        library::list_books,
        library::search_books,
        library::get_book,
        library::create_book,
        library::update_book,
        library::patch_book,
        library::delete_book,
    ),
    components(
        schemas(
            crate::models::ShelfBook,
            crate::models::ShelfBookPatch,
            crate::models::LibraryBook,
            crate::models::BookRequest,
            crate::models::PatchRequest,
            health::HealthResponse,
            health::ReadinessResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "shelf", description = "Books keyed by title"),
        (name = "library", description = "Books keyed by id, with rating and publication year")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
