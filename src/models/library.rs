//! Library book model (id-keyed collection with rating and publication year)

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Earliest accepted publication year
pub const MIN_PUBLISHED_YEAR: i32 = 2000;

/// Library book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LibraryBook {
    /// Assigned by the store, never changed afterwards
    pub id: i32,
    pub title: String,
    pub author: String,
    pub description: String,
    /// Rating from 1 to 5
    pub rating: i32,
    /// Publication year
    pub published_date: i32,
}

impl LibraryBook {
    pub fn new(
        id: i32,
        title: &str,
        author: &str,
        description: &str,
        rating: i32,
        published_date: i32,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            description: description.to_string(),
            rating,
            published_date,
        }
    }
}

/// Create / full update request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "title": "new book title",
    "author": "Mingfang",
    "description": "nice book",
    "rating": 5,
    "published_date": 2012
}))]
pub struct BookRequest {
    /// Ignored on create, selects the book on full update
    pub id: Option<i32>,
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: String,
    #[validate(length(min = 1, max = 100, message = "Description must be 1-100 characters"))]
    pub description: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(range(min = 2000, message = "Published date must be after 1999"))]
    pub published_date: i32,
}

impl BookRequest {
    /// Run field constraints and the current-year check
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        ensure_published_year(self.published_date)
    }

    /// Build the stored record for `id`
    pub fn into_book(self, id: i32) -> LibraryBook {
        LibraryBook {
            id,
            title: self.title,
            author: self.author,
            description: self.description,
            rating: self.rating,
            published_date: self.published_date,
        }
    }
}

/// Partial update request.
///
/// Every field present in the body is applied, including values that look empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PatchRequest {
    /// Book to patch
    pub id: i32,
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Author cannot be empty"))]
    pub author: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Description must be 1-100 characters"))]
    pub description: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(range(min = 2000, message = "Published date must be after 1999"))]
    pub published_date: Option<i32>,
}

impl PatchRequest {
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        match self.published_date {
            Some(year) => ensure_published_year(year),
            None => Ok(()),
        }
    }

    /// Apply the present fields to `book`; `id` is never touched
    pub fn apply_to(&self, book: &mut LibraryBook) {
        if let Some(ref title) = self.title {
            book.title = title.clone();
        }
        if let Some(ref author) = self.author {
            book.author = author.clone();
        }
        if let Some(ref description) = self.description {
            book.description = description.clone();
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
        if let Some(published_date) = self.published_date {
            book.published_date = published_date;
        }
    }
}

/// Library query parameters
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LibraryQuery {
    /// Rating from 1 to 5
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    /// Publication year, 2000 to the current year
    #[validate(range(min = 2000, message = "Published date must be after 1999"))]
    pub published_date: Option<i32>,
}

impl LibraryQuery {
    pub fn check(&self) -> AppResult<()> {
        self.validate()?;
        match self.published_date {
            Some(year) => ensure_published_year(year),
            None => Ok(()),
        }
    }

    pub fn matches(&self, book: &LibraryBook) -> bool {
        self.rating.map_or(true, |r| book.rating == r)
            && self.published_date.map_or(true, |y| book.published_date == y)
    }
}

/// Calendar year at the time of the call (UTC)
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// A publication year must be after 1999 and not in the future
pub fn ensure_published_year(year: i32) -> AppResult<()> {
    if year < MIN_PUBLISHED_YEAR {
        return Err(AppError::Validation(
            "published_date: Published date must be after 1999".to_string(),
        ));
    }
    if year > current_year() {
        return Err(AppError::Validation(
            "published_date: Published date cannot be in the future".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookRequest {
        BookRequest {
            id: None,
            title: "new book title".into(),
            author: "Mingfang".into(),
            description: "nice book".into(),
            rating: 5,
            published_date: 2012,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().check().is_ok());
    }

    #[test]
    fn test_field_constraints() {
        let cases = [
            BookRequest { title: "ab".into(), ..request() },
            BookRequest { author: String::new(), ..request() },
            BookRequest { description: String::new(), ..request() },
            BookRequest { description: "x".repeat(101), ..request() },
            BookRequest { rating: 0, ..request() },
            BookRequest { rating: 6, ..request() },
            BookRequest { published_date: 1999, ..request() },
        ];
        for case in cases {
            assert!(
                matches!(case.check(), Err(AppError::Validation(_))),
                "accepted {:?}",
                case
            );
        }

        assert!(BookRequest { description: "x".repeat(100), ..request() }.check().is_ok());
        assert!(BookRequest { title: "abc".into(), ..request() }.check().is_ok());
    }

    #[test]
    fn test_published_year_bounds() {
        assert!(ensure_published_year(2000).is_ok());
        assert!(ensure_published_year(current_year()).is_ok());
        assert!(ensure_published_year(1999).is_err());
        assert!(ensure_published_year(current_year() + 1).is_err());
        assert!(BookRequest { published_date: current_year() + 1, ..request() }
            .check()
            .is_err());
    }

    #[test]
    fn test_patch_validates_present_fields_only() {
        let patch = PatchRequest { id: 1, ..Default::default() };
        assert!(patch.check().is_ok());

        let patch = PatchRequest { id: 1, title: Some("ab".into()), ..Default::default() };
        assert!(patch.check().is_err());

        let patch = PatchRequest {
            id: 1,
            published_date: Some(current_year() + 1),
            ..Default::default()
        };
        assert!(patch.check().is_err());
    }

    #[test]
    fn test_patch_applies_present_fields() {
        let mut book = LibraryBook::new(1, "title one", "author one", "nice book", 4, 2012);
        PatchRequest {
            id: 99,
            rating: Some(1),
            description: Some("meh".into()),
            ..Default::default()
        }
        .apply_to(&mut book);
        assert_eq!(book, LibraryBook::new(1, "title one", "author one", "meh", 1, 2012));
    }

    #[test]
    fn test_query_matching() {
        let book = LibraryBook::new(1, "title one", "author one", "nice book", 4, 2012);
        assert!(LibraryQuery::default().matches(&book));
        assert!(LibraryQuery { rating: Some(4), published_date: Some(2012) }.matches(&book));
        assert!(!LibraryQuery { rating: Some(4), published_date: Some(2013) }.matches(&book));
        assert!(LibraryQuery { rating: Some(0), published_date: None }.check().is_err());
    }
}
