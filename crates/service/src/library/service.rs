use std::sync::Arc;

use tracing::{info, instrument, warn};

use super::domain::{Author, AuthorInput, Book, BookAuthorRow, BookInput, BulkDeleteOutcome};
use super::errors::LibraryError;
use super::repository::{AuthorRepository, BookRepository};
use super::validation::{validate_author, validate_book};

/// Library business service independent of web framework.
///
/// Mutations follow check-then-act against the repository: validate, look the
/// id up, then write. The lookup and the write are separate statements, so two
/// clients racing on one id can interleave; the repository reports the loser as
/// `Conflict` (duplicate insert) or `NotFound` (zero-row update/delete).
pub struct LibraryService<R: AuthorRepository + BookRepository> {
    repo: Arc<R>,
}

impl<R: AuthorRepository + BookRepository> LibraryService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Absent ids are `Ok(None)`, not an error.
    #[instrument(skip(self))]
    pub async fn get_author(&self, author_id: &str) -> Result<Option<Author>, LibraryError> {
        self.repo.find_author(author_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_authors(&self) -> Result<Vec<Author>, LibraryError> {
        let authors = self.repo.list_authors().await?;
        info!(count = authors.len(), "authors_listed");
        Ok(authors)
    }

    /// Create an author with a client-supplied id.
    ///
    /// # Examples
    /// ```
    /// use service::library::{LibraryService, LibraryError, repository::mock::MockLibraryRepository};
    /// use service::library::domain::AuthorInput;
    /// use std::sync::Arc;
    /// let svc = LibraryService::new(Arc::new(MockLibraryRepository::default()));
    /// let input = AuthorInput { author_id: Some("A1".into()), author_name: Some("X".into()) };
    /// let author = tokio_test::block_on(svc.create_author(input.clone())).unwrap();
    /// assert_eq!(author.author_name, "X");
    /// let again = tokio_test::block_on(svc.create_author(input));
    /// assert!(matches!(again, Err(LibraryError::Conflict(_))));
    /// ```
    #[instrument(skip(self, input), fields(author_id = ?input.author_id))]
    pub async fn create_author(&self, input: AuthorInput) -> Result<Author, LibraryError> {
        let author = validate_author(input)?;
        if self.repo.find_author(&author.author_id).await?.is_some() {
            warn!(author_id = %author.author_id, "author_already_exists");
            return Err(LibraryError::Conflict(format!("author '{}'", author.author_id)));
        }
        self.repo.insert_author(&author).await?;
        info!(author_id = %author.author_id, "author_created");
        Ok(author)
    }

    /// Replace the author's name. `author_id` from the path wins; a body id that
    /// disagrees with it is rejected.
    #[instrument(skip(self, input))]
    pub async fn update_author(&self, author_id: &str, mut input: AuthorInput) -> Result<Author, LibraryError> {
        input.author_id = Some(reconcile_id("authorId", author_id, input.author_id.take())?);
        let author = validate_author(input)?;
        if self.repo.find_author(author_id).await?.is_none() {
            warn!("author_update_target_missing");
            return Err(LibraryError::author_not_found(author_id));
        }
        self.repo.update_author(&author).await?;
        info!("author_updated");
        Ok(author)
    }

    #[instrument(skip(self))]
    pub async fn delete_author(&self, author_id: &str) -> Result<(), LibraryError> {
        if self.repo.find_author(author_id).await?.is_none() {
            warn!("author_delete_target_missing");
            return Err(LibraryError::author_not_found(author_id));
        }
        self.repo.delete_author(author_id).await?;
        info!("author_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_book(&self, book_id: &str) -> Result<Option<Book>, LibraryError> {
        self.repo.find_book(book_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
        let books = self.repo.list_books().await?;
        info!(count = books.len(), "books_listed");
        Ok(books)
    }

    #[instrument(skip(self, input), fields(book_id = ?input.book_id))]
    pub async fn create_book(&self, input: BookInput) -> Result<Book, LibraryError> {
        let book = validate_book(input)?;
        if self.repo.find_book(&book.book_id).await?.is_some() {
            warn!(book_id = %book.book_id, "book_already_exists");
            return Err(LibraryError::Conflict(format!("book '{}'", book.book_id)));
        }
        self.repo.insert_book(&book).await?;
        info!(book_id = %book.book_id, author = %book.book_author, "book_created");
        Ok(book)
    }

    /// Full replacement of author, title and detail. Same id rules as
    /// [`Self::update_author`].
    #[instrument(skip(self, input))]
    pub async fn update_book(&self, book_id: &str, mut input: BookInput) -> Result<Book, LibraryError> {
        input.book_id = Some(reconcile_id("bookId", book_id, input.book_id.take())?);
        let book = validate_book(input)?;
        if self.repo.find_book(book_id).await?.is_none() {
            warn!("book_update_target_missing");
            return Err(LibraryError::book_not_found(book_id));
        }
        self.repo.update_book(&book).await?;
        info!("book_updated");
        Ok(book)
    }

    #[instrument(skip(self))]
    pub async fn delete_book(&self, book_id: &str) -> Result<(), LibraryError> {
        if self.repo.find_book(book_id).await?.is_none() {
            warn!("book_delete_target_missing");
            return Err(LibraryError::book_not_found(book_id));
        }
        self.repo.delete_book(book_id).await?;
        info!("book_deleted");
        Ok(())
    }

    /// Books paired with authors whose name equals `bookAuthor` exactly.
    #[instrument(skip(self))]
    pub async fn books_join_authors(&self) -> Result<Vec<BookAuthorRow>, LibraryError> {
        let rows = self.repo.join_books_authors().await?;
        info!(count = rows.len(), "books_joined_with_authors");
        Ok(rows)
    }

    /// Bulk delete by the denormalized author name. Zero matches is not an error.
    #[instrument(skip(self))]
    pub async fn delete_books_by_author_name(&self, author_name: &str) -> Result<BulkDeleteOutcome, LibraryError> {
        if author_name.is_empty() {
            return Err(LibraryError::Validation("author name cannot be empty".into()));
        }
        let deleted = self.repo.delete_books_by_author(author_name).await?;
        info!(deleted, "books_deleted_by_author");
        Ok(BulkDeleteOutcome { author_name: author_name.to_string(), deleted })
    }
}

fn reconcile_id(field: &str, path_id: &str, body_id: Option<String>) -> Result<String, LibraryError> {
    match body_id {
        Some(id) if !id.is_empty() && id != path_id => Err(LibraryError::Validation(format!(
            "{field} '{id}' in body does not match '{path_id}' in path"
        ))),
        _ => Ok(path_id.to_string()),
    }
}
