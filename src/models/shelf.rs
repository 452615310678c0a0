//! Shelf book model (title-keyed collection)

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::same_text;

/// Shelf book record, keyed by its title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ShelfBook {
    /// Title, compared case-insensitively when used as a key
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
    pub category: String,
}

impl ShelfBook {
    pub fn new(title: &str, author: &str, category: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
        }
    }

    pub fn has_title(&self, title: &str) -> bool {
        same_text(&self.title, title)
    }
}

/// Partial update request.
///
/// Empty strings are treated like missing fields: the stored value is kept.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ShelfBookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl ShelfBookPatch {
    /// Merge into `book`, ignoring absent and empty values
    pub fn apply_to(&self, book: &mut ShelfBook) {
        fn merge(target: &mut String, value: &Option<String>) {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                *target = v.to_string();
            }
        }

        merge(&mut book.title, &self.title);
        merge(&mut book.author, &self.author);
        merge(&mut book.category, &self.category);
    }
}

/// Shelf query parameters (all given predicates must match)
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShelfQuery {
    /// Exact title, case-insensitive
    pub title: Option<String>,
    /// Exact author, case-insensitive
    pub author: Option<String>,
    /// Exact category, case-insensitive
    pub category: Option<String>,
}

impl ShelfQuery {
    pub fn matches(&self, book: &ShelfBook) -> bool {
        let check = |predicate: &Option<String>, value: &str| {
            predicate.as_deref().map_or(true, |p| same_text(p, value))
        };

        check(&self.title, &book.title)
            && check(&self.author, &book.author)
            && check(&self.category, &book.category)
    }
}

/// Required `category` query parameter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Exact category, case-insensitive
    pub category: String,
}

/// Required `author` query parameter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AuthorQuery {
    /// Exact author, case-insensitive
    pub author: String,
}
