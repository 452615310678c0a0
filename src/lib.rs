//! Bookshelf
//!
//! A REST JSON API over two in-memory book collections: the shelf, keyed by
//! title, and the library, keyed by a store-assigned numeric id.

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build state with stores seeded according to `config.store.seed`
    pub fn new(config: &AppConfig) -> Self {
        let repository = if config.store.seed {
            Repository::seeded()
        } else {
            Repository::new()
        };
        Self::with_repository(repository)
    }

    pub fn with_repository(repository: Repository) -> Self {
        Self {
            services: Arc::new(Services::new(repository.clone())),
            repository,
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Title-keyed books
    let shelf = Router::new()
        .route("/books", get(api::shelf::list_books))
        .route("/books/", get(api::shelf::books_by_category))
        .route("/books/author/", get(api::shelf::books_by_author))
        .route("/books/create_book", post(api::shelf::create_book))
        .route("/books/update_book", put(api::shelf::update_book))
        .route("/books/delete_book/:title", delete(api::shelf::delete_book))
        .route(
            "/books/:title",
            get(api::shelf::get_book)
                .put(api::shelf::replace_book)
                .patch(api::shelf::patch_book),
        )
        // the segment is the author here; matchit needs one name per position
        .route("/books/:title/", get(api::shelf::books_by_author_and_category))
        .route("/author/:author", get(api::shelf::books_of_author));

    // Id-keyed books
    let library = Router::new()
        .route("/books", get(api::library::list_books))
        .route("/books/", get(api::library::search_books))
        .route("/books/update_book", put(api::library::update_book))
        .route("/books/patch_book", patch(api::library::patch_book))
        .route(
            "/books/:id",
            get(api::library::get_book).delete(api::library::delete_book),
        )
        .route("/create-books", post(api::library::create_book));

    // API v1 routes
    let api_v1 = Router::new()
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        .nest("/shelf", shelf)
        .nest("/library", library)
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
