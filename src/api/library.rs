//! Library endpoints (books keyed by numeric id)

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{ApiJson, ApiPath, ApiQuery};
use crate::{
    error::AppResult,
    models::{BookRequest, LibraryBook, LibraryQuery, PatchRequest},
};

/// List all library books
#[utoipa::path(
    get,
    path = "/library/books",
    tag = "library",
    responses(
        (status = 200, description = "List of books", body = Vec<LibraryBook>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LibraryBook>>> {
    let books = state.services.library.list().await?;
    Ok(Json(books))
}

/// Filter books by rating and/or publication year
#[utoipa::path(
    get,
    path = "/library/books/",
    tag = "library",
    params(LibraryQuery),
    responses(
        (status = 200, description = "Matching books", body = Vec<LibraryBook>),
        (status = 422, description = "Invalid query", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<LibraryQuery>,
) -> AppResult<Json<Vec<LibraryBook>>> {
    let books = state.services.library.search(&query).await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/library/books/{id}",
    tag = "library",
    params(("id" = i32, Path, description = "Book ID, greater than 0")),
    responses(
        (status = 200, description = "Book details", body = LibraryBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<LibraryBook>> {
    let book = state.services.library.get_by_id(id).await?;
    Ok(Json(book))
}

/// Create a book; the id is assigned by the store
#[utoipa::path(
    post,
    path = "/library/create-books",
    tag = "library",
    request_body = BookRequest,
    responses(
        (status = 201, description = "Book created", body = LibraryBook),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<BookRequest>,
) -> AppResult<(StatusCode, Json<LibraryBook>)> {
    let book = state.services.library.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace the book selected by the body's id
#[utoipa::path(
    put,
    path = "/library/books/update_book",
    tag = "library",
    request_body = BookRequest,
    responses(
        (status = 204, description = "Book replaced"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    ApiJson(data): ApiJson<BookRequest>,
) -> AppResult<StatusCode> {
    state.services.library.update(data).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Partially update the book selected by the body's id
#[utoipa::path(
    patch,
    path = "/library/books/patch_book",
    tag = "library",
    request_body = PatchRequest,
    responses(
        (status = 200, description = "Book patched", body = LibraryBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn patch_book(
    State(state): State<crate::AppState>,
    ApiJson(patch): ApiJson<PatchRequest>,
) -> AppResult<Json<LibraryBook>> {
    let book = state.services.library.patch(&patch).await?;
    Ok(Json(book))
}

/// Delete a book by ID
#[utoipa::path(
    delete,
    path = "/library/books/{id}",
    tag = "library",
    params(("id" = i32, Path, description = "Book ID, greater than 0")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<StatusCode> {
    state.services.library.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
