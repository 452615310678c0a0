//! Data models for Bookshelf

pub mod library;
pub mod shelf;

// Re-export commonly used types
pub use library::{BookRequest, LibraryBook, LibraryQuery, PatchRequest};
pub use shelf::{ShelfBook, ShelfBookPatch, ShelfQuery};

/// Case-insensitive exact comparison used for every string key and predicate
pub fn same_text(a: &str, b: &str) -> bool {
    a == b || fold_case(a) == fold_case(b)
}

/// Full case fold: uppercasing first expands characters such as `ß` to `SS`,
/// so `"straße"` and `"STRASSE"` fold to the same string.
///
/// Differs from Unicode's `CaseFolding.txt` only for a handful of
/// characters whose uppercase form is not their fold target (e.g. final sigma).
fn fold_case(s: &str) -> String {
    s.to_uppercase().to_lowercase()
}
