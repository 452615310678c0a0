//! Sample books loaded at startup when `store.seed` is enabled

use crate::models::{LibraryBook, ShelfBook};

pub fn shelf_books() -> Vec<ShelfBook> {
    vec![
        ShelfBook::new("Title One", "Author One", "science"),
        ShelfBook::new("Title Two", "Author Two", "science"),
        ShelfBook::new("Title Three", "Author Three", "history"),
        ShelfBook::new("Title Four", "Author Four", "math"),
        ShelfBook::new("Title Five", "Author Five", "math"),
        ShelfBook::new("Title Six", "Author Two", "math"),
    ]
}

pub fn library_books() -> Vec<LibraryBook> {
    vec![
        LibraryBook::new(1, "title one", "author one", "nice book", 4, 2012),
        LibraryBook::new(2, "title two", "author two", "great book", 5, 2015),
        LibraryBook::new(3, "title three", "author one", "good book", 3, 2017),
    ]
}
