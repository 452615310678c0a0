//! Repository layer: in-memory book collections

pub mod collection;
pub mod library;
pub mod seed;
pub mod shelf;

pub use collection::Collection;

use crate::models::{LibraryBook, ShelfBook};

/// Main repository struct holding one collection per service
#[derive(Clone)]
pub struct Repository {
    pub shelf: Collection<ShelfBook>,
    pub library: Collection<LibraryBook>,
}

impl Repository {
    /// Create a repository with empty collections
    pub fn new() -> Self {
        Self::with_books(Vec::new(), Vec::new())
    }

    /// Create a repository pre-populated with the sample books
    pub fn seeded() -> Self {
        Self::with_books(seed::shelf_books(), seed::library_books())
    }

    pub fn with_books(shelf: Vec<ShelfBook>, library: Vec<LibraryBook>) -> Self {
        Self {
            shelf: Collection::new(shelf),
            library: Collection::new(library),
        }
    }
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}
