use models::errors::ModelError;
use sea_orm::DatabaseConnection;

use crate::library::domain::{Author, Book, BookAuthorRow};
use crate::library::errors::LibraryError;
use crate::library::repository::{AuthorRepository, BookRepository};

/// SeaORM-backed repository implementation.
pub struct SeaOrmLibraryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmLibraryRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn author_from_model(m: models::author::Model) -> Author {
    Author { author_id: m.author_id, author_name: m.author_name }
}

fn book_from_model(m: models::book::Model) -> Result<Book, LibraryError> {
    let book_detail = m.detail()?;
    Ok(Book { book_id: m.book_id, book_author: m.book_author, book_title: m.book_title, book_detail })
}

/// Primary-key collisions carry the driver's message; replace it with the id.
fn on_conflict(entity: &str, id: &str) -> impl FnOnce(ModelError) -> LibraryError {
    let label = format!("{entity} '{id}'");
    move |e| match e {
        ModelError::Conflict(_) => LibraryError::Conflict(label),
        other => other.into(),
    }
}

#[async_trait::async_trait]
impl AuthorRepository for SeaOrmLibraryRepository {
    async fn find_author(&self, author_id: &str) -> Result<Option<Author>, LibraryError> {
        Ok(models::author::find(&self.db, author_id).await?.map(author_from_model))
    }

    async fn list_authors(&self) -> Result<Vec<Author>, LibraryError> {
        let rows = models::author::list(&self.db).await?;
        Ok(rows.into_iter().map(author_from_model).collect())
    }

    async fn insert_author(&self, author: &Author) -> Result<(), LibraryError> {
        models::author::create(&self.db, &author.author_id, &author.author_name)
            .await
            .map_err(on_conflict("author", &author.author_id))?;
        Ok(())
    }

    async fn update_author(&self, author: &Author) -> Result<(), LibraryError> {
        models::author::update_name(&self.db, &author.author_id, &author.author_name).await?;
        Ok(())
    }

    async fn delete_author(&self, author_id: &str) -> Result<(), LibraryError> {
        Ok(models::author::delete(&self.db, author_id).await?)
    }
}

#[async_trait::async_trait]
impl BookRepository for SeaOrmLibraryRepository {
    async fn find_book(&self, book_id: &str) -> Result<Option<Book>, LibraryError> {
        models::book::find(&self.db, book_id).await?.map(book_from_model).transpose()
    }

    /// A single corrupt detail fails the whole listing.
    async fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
        let rows = models::book::list(&self.db).await?;
        rows.into_iter().map(book_from_model).collect()
    }

    async fn insert_book(&self, book: &Book) -> Result<(), LibraryError> {
        models::book::create(&self.db, &book.book_id, &book.book_author, &book.book_title, &book.book_detail)
            .await
            .map_err(on_conflict("book", &book.book_id))?;
        Ok(())
    }

    async fn update_book(&self, book: &Book) -> Result<(), LibraryError> {
        models::book::update(&self.db, &book.book_id, &book.book_author, &book.book_title, &book.book_detail).await?;
        Ok(())
    }

    async fn delete_book(&self, book_id: &str) -> Result<(), LibraryError> {
        Ok(models::book::delete(&self.db, book_id).await?)
    }

    async fn delete_books_by_author(&self, author_name: &str) -> Result<u64, LibraryError> {
        Ok(models::book::delete_by_author(&self.db, author_name).await?)
    }

    async fn join_books_authors(&self) -> Result<Vec<BookAuthorRow>, LibraryError> {
        let rows = models::book::join_authors(&self.db).await?;
        Ok(rows
            .into_iter()
            .map(|r| BookAuthorRow { book_id: r.book_id, author_id: r.author_id, book_title: r.book_title })
            .collect())
    }
}
