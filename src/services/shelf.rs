//! Shelf service: title-keyed books with ignore-empty partial updates

use validator::Validate;

use crate::{
    error::AppResult,
    models::{ShelfBook, ShelfBookPatch, ShelfQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct ShelfService {
    repository: Repository,
}

impl ShelfService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ShelfQuery) -> AppResult<Vec<ShelfBook>> {
        Ok(self.repository.shelf_list(query).await)
    }

    pub async fn list_by_category(&self, category: &str) -> AppResult<Vec<ShelfBook>> {
        let query = ShelfQuery {
            category: Some(category.to_string()),
            ..Default::default()
        };
        self.list(&query).await
    }

    pub async fn list_by_author(&self, author: &str) -> AppResult<Vec<ShelfBook>> {
        Ok(self.repository.shelf_list_by_author(author).await)
    }

    pub async fn list_by_author_and_category(
        &self,
        author: &str,
        category: &str,
    ) -> AppResult<Vec<ShelfBook>> {
        let query = ShelfQuery {
            author: Some(author.to_string()),
            category: Some(category.to_string()),
            ..Default::default()
        };
        self.list(&query).await
    }

    pub async fn get_by_title(&self, title: &str) -> AppResult<ShelfBook> {
        self.repository.shelf_get_by_title(title).await.map_err(|e| {
            tracing::debug!("Shelf book lookup failed: {}", e);
            e
        })
    }

    pub async fn create(&self, book: ShelfBook) -> AppResult<ShelfBook> {
        book.validate()?;
        let created = self.repository.shelf_create(book).await;
        tracing::info!(title = %created.title, "Shelf book created");
        Ok(created)
    }

    /// Replace the book whose title matches the body's own title
    pub async fn update(&self, book: ShelfBook) -> AppResult<ShelfBook> {
        let title = book.title.clone();
        self.replace(&title, book).await
    }

    /// Replace the book stored under `title`
    pub async fn replace(&self, title: &str, book: ShelfBook) -> AppResult<ShelfBook> {
        book.validate()?;
        let replaced = self.repository.shelf_replace(title, book).await?;
        tracing::info!(title = %title, "Shelf book replaced");
        Ok(replaced)
    }

    pub async fn patch(&self, title: &str, patch: &ShelfBookPatch) -> AppResult<ShelfBook> {
        let patched = self.repository.shelf_patch(title, patch).await?;
        tracing::info!(title = %title, "Shelf book patched");
        Ok(patched)
    }

    pub async fn delete(&self, title: &str) -> AppResult<()> {
        let removed = self.repository.shelf_delete(title).await?;
        tracing::info!(title = %removed.title, "Shelf book deleted");
        Ok(())
    }
}
