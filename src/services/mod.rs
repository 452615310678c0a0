//! Business logic services

pub mod library;
pub mod shelf;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub shelf: shelf::ShelfService,
    pub library: library::LibraryService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            shelf: shelf::ShelfService::new(repository.clone()),
            library: library::LibraryService::new(repository),
        }
    }
}
