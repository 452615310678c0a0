//! Shelf domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{same_text, ShelfBook, ShelfBookPatch, ShelfQuery},
};

impl Repository {
    /// List shelf books matching every given predicate
    pub async fn shelf_list(&self, query: &ShelfQuery) -> Vec<ShelfBook> {
        self.shelf.filter(|book| query.matches(book)).await
    }

    /// Books by author, case-insensitive
    pub async fn shelf_list_by_author(&self, author: &str) -> Vec<ShelfBook> {
        self.shelf.filter(|book| same_text(&book.author, author)).await
    }

    /// Get the first book with the given title
    pub async fn shelf_get_by_title(&self, title: &str) -> AppResult<ShelfBook> {
        self.shelf
            .find(|book| book.has_title(title))
            .await
            .ok_or_else(|| AppError::not_found(title))
    }

    /// Append a book
    pub async fn shelf_create(&self, book: ShelfBook) -> ShelfBook {
        self.shelf.push_with(move |_| book).await
    }

    /// Replace the first book with the given title
    pub async fn shelf_replace(&self, title: &str, book: ShelfBook) -> AppResult<ShelfBook> {
        self.shelf
            .replace_first(|b| b.has_title(title), book)
            .await
            .ok_or_else(|| AppError::not_found(title))
    }

    /// Merge a patch into the first book with the given title
    pub async fn shelf_patch(&self, title: &str, patch: &ShelfBookPatch) -> AppResult<ShelfBook> {
        self.shelf
            .update_first(|b| b.has_title(title), |b| patch.apply_to(b))
            .await
            .ok_or_else(|| AppError::not_found(title))
    }

    /// Delete the first book with the given title
    pub async fn shelf_delete(&self, title: &str) -> AppResult<ShelfBook> {
        self.shelf
            .remove_first(|b| b.has_title(title))
            .await
            .ok_or_else(|| AppError::not_found(title))
    }
}
