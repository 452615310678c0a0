//! Library domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{BookRequest, LibraryBook, LibraryQuery, PatchRequest},
};

/// Id for the next book: one past the id of the last stored book.
///
/// This follows store order, not the largest id, so a collection reordered
/// by replacement can hand out an id that already exists.
pub fn next_id(books: &[LibraryBook]) -> i32 {
    books.last().map_or(1, |book| book.id + 1)
}

impl Repository {
    /// List library books matching the query
    pub async fn library_list(&self, query: &LibraryQuery) -> Vec<LibraryBook> {
        self.library.filter(|book| query.matches(book)).await
    }

    /// Get library book by ID
    pub async fn library_get_by_id(&self, id: i32) -> AppResult<LibraryBook> {
        self.library
            .find(|book| book.id == id)
            .await
            .ok_or_else(|| AppError::not_found(id))
    }

    /// Append a book, assigning its id under the same lock
    pub async fn library_create(&self, data: BookRequest) -> LibraryBook {
        self.library
            .push_with(move |books| data.into_book(next_id(books)))
            .await
    }

    /// Replace every book carrying `id`
    pub async fn library_replace(&self, id: i32, data: BookRequest) -> AppResult<LibraryBook> {
        let book = data.into_book(id);
        let replaced = self.library.replace_all(|b| b.id == id, book.clone()).await;
        if replaced == 0 {
            return Err(AppError::not_found(id));
        }
        Ok(book)
    }

    /// Apply a partial update to the book named by `patch.id`
    pub async fn library_patch(&self, patch: &PatchRequest) -> AppResult<LibraryBook> {
        self.library
            .update_first(|b| b.id == patch.id, |b| patch.apply_to(b))
            .await
            .ok_or_else(|| AppError::not_found(patch.id))
    }

    /// Delete library book by ID
    pub async fn library_delete(&self, id: i32) -> AppResult<LibraryBook> {
        self.library
            .remove_first(|b| b.id == id)
            .await
            .ok_or_else(|| AppError::not_found(id))
    }
}
