//! Library service: id-keyed books with validated, apply-if-present partial updates

use crate::{
    error::{AppError, AppResult},
    models::{BookRequest, LibraryBook, LibraryQuery, PatchRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

/// Path ids must be strictly positive
fn ensure_positive_id(id: i32) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::Validation("id: must be greater than 0".to_string()));
    }
    Ok(())
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<LibraryBook>> {
        Ok(self.repository.library.all().await)
    }

    pub async fn search(&self, query: &LibraryQuery) -> AppResult<Vec<LibraryBook>> {
        query.check()?;
        Ok(self.repository.library_list(query).await)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<LibraryBook> {
        ensure_positive_id(id)?;
        self.repository.library_get_by_id(id).await
    }

    pub async fn create(&self, data: BookRequest) -> AppResult<LibraryBook> {
        data.check()?;
        let book = self.repository.library_create(data).await;
        tracing::info!(id = book.id, title = %book.title, "Library book created");
        Ok(book)
    }

    /// Full update of the book selected by `data.id`
    pub async fn update(&self, data: BookRequest) -> AppResult<LibraryBook> {
        data.check()?;
        let id = data
            .id
            .ok_or_else(|| AppError::Validation("id: required for update".to_string()))?;
        let book = self.repository.library_replace(id, data).await?;
        tracing::info!(id, "Library book replaced");
        Ok(book)
    }

    pub async fn patch(&self, patch: &PatchRequest) -> AppResult<LibraryBook> {
        patch.check()?;
        let book = self.repository.library_patch(patch).await?;
        tracing::info!(id = book.id, "Library book patched");
        Ok(book)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        ensure_positive_id(id)?;
        self.repository.library_delete(id).await?;
        tracing::info!(id, "Library book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::library::current_year;

    fn request(title: &str) -> BookRequest {
        BookRequest {
            id: None,
            title: title.to_string(),
            author: "A".into(),
            description: "d".into(),
            rating: 5,
            published_date: 2020,
        }
    }

    fn empty() -> (LibraryService, Repository) {
        let repository = Repository::new();
        (LibraryService::new(repository.clone()), repository)
    }

    fn seeded() -> (LibraryService, Repository) {
        let repository = Repository::seeded();
        (LibraryService::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let (service, _) = empty();
        assert_eq!(service.create(request("first")).await.unwrap().id, 1);
        assert_eq!(service.create(request("second")).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_create_ignores_request_id() {
        let (service, _) = empty();
        let book = service
            .create(BookRequest { id: Some(42), ..request("first") })
            .await
            .unwrap();
        assert_eq!(book.id, 1);
    }

    #[tokio::test]
    async fn test_id_after_delete_follows_last_element() {
        let (service, repository) = seeded();
        service.delete(2).await.unwrap();
        assert_eq!(repository.library.len().await, 2);
        assert_eq!(service.create(request("new book")).await.unwrap().id, 4);
    }

    #[tokio::test]
    async fn test_id_after_deleting_last_reuses_it() {
        let (service, _) = seeded();
        service.delete(3).await.unwrap();
        assert_eq!(service.create(request("new book")).await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_invalid_create_does_not_mutate() {
        let (service, repository) = seeded();
        let result = service
            .create(BookRequest { published_date: current_year() + 1, ..request("future") })
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(repository.library.len().await, 3);
    }

    #[tokio::test]
    async fn test_get_and_delete_not_found() {
        let (service, _) = seeded();
        assert!(matches!(
            service.get_by_id(9).await,
            Err(AppError::NotFound(msg)) if msg == "9 not found"
        ));
        assert!(matches!(service.delete(9).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get_by_id(0).await, Err(AppError::Validation(_))));
        assert!(matches!(service.delete(-1).await, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_whole_record() {
        let (service, _) = seeded();
        service
            .update(BookRequest { id: Some(2), ..request("replaced") })
            .await
            .unwrap();
        assert_eq!(
            service.get_by_id(2).await.unwrap(),
            LibraryBook::new(2, "replaced", "A", "d", 5, 2020)
        );

        assert!(matches!(
            service.update(BookRequest { id: Some(9), ..request("replaced") }).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update(request("replaced")).await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_only_touches_present_fields() {
        let (service, _) = seeded();
        let patch = PatchRequest {
            id: 1,
            rating: Some(1),
            ..Default::default()
        };
        let book = service.patch(&patch).await.unwrap();
        assert_eq!(book, LibraryBook::new(1, "title one", "author one", "nice book", 1, 2012));

        let bad = PatchRequest { id: 1, rating: Some(6), ..Default::default() };
        assert!(matches!(service.patch(&bad).await, Err(AppError::Validation(_))));
        assert_eq!(service.get_by_id(1).await.unwrap().rating, 1);

        let missing = PatchRequest { id: 9, ..Default::default() };
        assert!(matches!(service.patch(&missing).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_by_rating_and_year() {
        let (service, _) = seeded();
        let books = service
            .search(&LibraryQuery { rating: Some(3), published_date: None })
            .await
            .unwrap();
        assert_eq!(books.iter().map(|b| b.id).collect::<Vec<_>>(), vec![3]);

        let books = service
            .search(&LibraryQuery { rating: Some(4), published_date: Some(2015) })
            .await
            .unwrap();
        assert!(books.is_empty());

        assert_eq!(service.search(&LibraryQuery::default()).await.unwrap().len(), 3);
        assert!(service
            .search(&LibraryQuery { rating: None, published_date: Some(current_year() + 1) })
            .await
            .is_err());
    }
}
