//! Shelf endpoints (books keyed by title)

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{ApiJson, ApiPath, ApiQuery};
use crate::{
    error::AppResult,
    models::{
        shelf::{AuthorQuery, CategoryQuery},
        ShelfBook, ShelfBookPatch, ShelfQuery,
    },
};

/// List all shelf books, optionally filtered
#[utoipa::path(
    get,
    path = "/shelf/books",
    tag = "shelf",
    params(ShelfQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<ShelfBook>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<ShelfQuery>,
) -> AppResult<Json<Vec<ShelfBook>>> {
    let books = state.services.shelf.list(&query).await?;
    Ok(Json(books))
}

/// Get a book by title
#[utoipa::path(
    get,
    path = "/shelf/books/{title}",
    tag = "shelf",
    params(("title" = String, Path, description = "Book title, case-insensitive")),
    responses(
        (status = 200, description = "Book details", body = ShelfBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    ApiPath(title): ApiPath<String>,
) -> AppResult<Json<ShelfBook>> {
    let book = state.services.shelf.get_by_title(&title).await?;
    Ok(Json(book))
}

/// List books of a category
#[utoipa::path(
    get,
    path = "/shelf/books/",
    tag = "shelf",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Books in the category", body = Vec<ShelfBook>)
    )
)]
pub async fn books_by_category(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> AppResult<Json<Vec<ShelfBook>>> {
    let books = state.services.shelf.list_by_category(&query.category).await?;
    Ok(Json(books))
}

/// List books of an author (query form)
#[utoipa::path(
    get,
    path = "/shelf/books/author/",
    tag = "shelf",
    params(AuthorQuery),
    responses(
        (status = 200, description = "Books by the author", body = Vec<ShelfBook>)
    )
)]
pub async fn books_by_author(
    State(state): State<crate::AppState>,
    ApiQuery(query): ApiQuery<AuthorQuery>,
) -> AppResult<Json<Vec<ShelfBook>>> {
    let books = state.services.shelf.list_by_author(&query.author).await?;
    Ok(Json(books))
}

/// List books of an author (path form)
#[utoipa::path(
    get,
    path = "/shelf/author/{author}",
    tag = "shelf",
    params(("author" = String, Path, description = "Author")),
    responses(
        (status = 200, description = "Books by the author", body = Vec<ShelfBook>)
    )
)]
pub async fn books_of_author(
    State(state): State<crate::AppState>,
    ApiPath(author): ApiPath<String>,
) -> AppResult<Json<Vec<ShelfBook>>> {
    let books = state.services.shelf.list_by_author(&author).await?;
    Ok(Json(books))
}

/// List books of an author within a category
#[utoipa::path(
    get,
    path = "/shelf/books/{author}/",
    tag = "shelf",
    params(
        ("author" = String, Path, description = "Author"),
        CategoryQuery
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<ShelfBook>)
    )
)]
pub async fn books_by_author_and_category(
    State(state): State<crate::AppState>,
    ApiPath(author): ApiPath<String>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> AppResult<Json<Vec<ShelfBook>>> {
    let books = state
        .services
        .shelf
        .list_by_author_and_category(&author, &query.category)
        .await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/shelf/books/create_book",
    tag = "shelf",
    request_body = ShelfBook,
    responses(
        (status = 201, description = "Book created", body = ShelfBook),
        (status = 422, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ApiJson(book): ApiJson<ShelfBook>,
) -> AppResult<(StatusCode, Json<ShelfBook>)> {
    let created = state.services.shelf.create(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the book whose title matches the body's title
#[utoipa::path(
    put,
    path = "/shelf/books/update_book",
    tag = "shelf",
    request_body = ShelfBook,
    responses(
        (status = 200, description = "Book replaced", body = ShelfBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    ApiJson(book): ApiJson<ShelfBook>,
) -> AppResult<Json<ShelfBook>> {
    let updated = state.services.shelf.update(book).await?;
    Ok(Json(updated))
}

/// Replace a book by title
#[utoipa::path(
    put,
    path = "/shelf/books/{title}",
    tag = "shelf",
    params(("title" = String, Path, description = "Book title, case-insensitive")),
    request_body = ShelfBook,
    responses(
        (status = 200, description = "Book replaced", body = ShelfBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn replace_book(
    State(state): State<crate::AppState>,
    ApiPath(title): ApiPath<String>,
    ApiJson(book): ApiJson<ShelfBook>,
) -> AppResult<Json<ShelfBook>> {
    let replaced = state.services.shelf.replace(&title, book).await?;
    Ok(Json(replaced))
}

/// Partially update a book by title; empty values keep the stored value
#[utoipa::path(
    patch,
    path = "/shelf/books/{title}",
    tag = "shelf",
    params(("title" = String, Path, description = "Book title, case-insensitive")),
    request_body = ShelfBookPatch,
    responses(
        (status = 200, description = "Book patched", body = ShelfBook),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn patch_book(
    State(state): State<crate::AppState>,
    ApiPath(title): ApiPath<String>,
    ApiJson(patch): ApiJson<ShelfBookPatch>,
) -> AppResult<Json<ShelfBook>> {
    let patched = state.services.shelf.patch(&title, &patch).await?;
    Ok(Json(patched))
}

/// Delete a book by title
#[utoipa::path(
    delete,
    path = "/shelf/books/delete_book/{title}",
    tag = "shelf",
    params(("title" = String, Path, description = "Book title, case-insensitive")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    ApiPath(title): ApiPath<String>,
) -> AppResult<StatusCode> {
    state.services.shelf.delete(&title).await?;
    Ok(StatusCode::NO_CONTENT)
}
