use async_trait::async_trait;

use super::domain::{Author, Book, BookAuthorRow};
use super::errors::LibraryError;

/// Persistence for authors. Implementations execute statements as asked;
/// existence policy is the service's job.
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn find_author(&self, author_id: &str) -> Result<Option<Author>, LibraryError>;
    async fn list_authors(&self) -> Result<Vec<Author>, LibraryError>;
    async fn insert_author(&self, author: &Author) -> Result<(), LibraryError>;
    async fn update_author(&self, author: &Author) -> Result<(), LibraryError>;
    async fn delete_author(&self, author_id: &str) -> Result<(), LibraryError>;
}

/// Persistence for books, including the name-based join view.
#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_book(&self, book_id: &str) -> Result<Option<Book>, LibraryError>;
    async fn list_books(&self) -> Result<Vec<Book>, LibraryError>;
    async fn insert_book(&self, book: &Book) -> Result<(), LibraryError>;
    async fn update_book(&self, book: &Book) -> Result<(), LibraryError>;
    async fn delete_book(&self, book_id: &str) -> Result<(), LibraryError>;
    async fn delete_books_by_author(&self, author_name: &str) -> Result<u64, LibraryError>;
    async fn join_books_authors(&self) -> Result<Vec<BookAuthorRow>, LibraryError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockLibraryRepository {
        authors: Mutex<BTreeMap<String, Author>>, // key: author_id
        books: Mutex<BTreeMap<String, Book>>,     // key: book_id
        writes: AtomicUsize,
        unavailable: AtomicBool,
    }

    impl MockLibraryRepository {
        /// Number of insert/update/delete calls that reached the store.
        pub fn write_count(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        /// Make every subsequent call fail with `LibraryError::Store`.
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        fn check(&self) -> Result<(), LibraryError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(LibraryError::Store("mock store unavailable".into()));
            }
            Ok(())
        }

        fn write(&self) -> Result<(), LibraryError> {
            self.check()?;
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn authors(&self) -> Result<MutexGuard<'_, BTreeMap<String, Author>>, LibraryError> {
            self.authors.lock().map_err(|_| LibraryError::Store("authors lock poisoned".into()))
        }

        fn books(&self) -> Result<MutexGuard<'_, BTreeMap<String, Book>>, LibraryError> {
            self.books.lock().map_err(|_| LibraryError::Store("books lock poisoned".into()))
        }
    }

    #[async_trait]
    impl AuthorRepository for MockLibraryRepository {
        async fn find_author(&self, author_id: &str) -> Result<Option<Author>, LibraryError> {
            self.check()?;
            Ok(self.authors()?.get(author_id).cloned())
        }

        async fn list_authors(&self) -> Result<Vec<Author>, LibraryError> {
            self.check()?;
            Ok(self.authors()?.values().cloned().collect())
        }

        async fn insert_author(&self, author: &Author) -> Result<(), LibraryError> {
            self.write()?;
            let mut authors = self.authors()?;
            if authors.contains_key(&author.author_id) {
                return Err(LibraryError::Conflict(format!("author '{}'", author.author_id)));
            }
            authors.insert(author.author_id.clone(), author.clone());
            Ok(())
        }

        async fn update_author(&self, author: &Author) -> Result<(), LibraryError> {
            self.write()?;
            match self.authors()?.get_mut(&author.author_id) {
                Some(slot) => {
                    *slot = author.clone();
                    Ok(())
                }
                None => Err(LibraryError::author_not_found(&author.author_id)),
            }
        }

        async fn delete_author(&self, author_id: &str) -> Result<(), LibraryError> {
            self.write()?;
            self.authors()?
                .remove(author_id)
                .map(|_| ())
                .ok_or_else(|| LibraryError::author_not_found(author_id))
        }
    }

    #[async_trait]
    impl BookRepository for MockLibraryRepository {
        async fn find_book(&self, book_id: &str) -> Result<Option<Book>, LibraryError> {
            self.check()?;
            Ok(self.books()?.get(book_id).cloned())
        }

        async fn list_books(&self) -> Result<Vec<Book>, LibraryError> {
            self.check()?;
            Ok(self.books()?.values().cloned().collect())
        }

        async fn insert_book(&self, book: &Book) -> Result<(), LibraryError> {
            self.write()?;
            let mut books = self.books()?;
            if books.contains_key(&book.book_id) {
                return Err(LibraryError::Conflict(format!("book '{}'", book.book_id)));
            }
            books.insert(book.book_id.clone(), book.clone());
            Ok(())
        }

        async fn update_book(&self, book: &Book) -> Result<(), LibraryError> {
            self.write()?;
            match self.books()?.get_mut(&book.book_id) {
                Some(slot) => {
                    *slot = book.clone();
                    Ok(())
                }
                None => Err(LibraryError::book_not_found(&book.book_id)),
            }
        }

        async fn delete_book(&self, book_id: &str) -> Result<(), LibraryError> {
            self.write()?;
            self.books()?
                .remove(book_id)
                .map(|_| ())
                .ok_or_else(|| LibraryError::book_not_found(book_id))
        }

        async fn delete_books_by_author(&self, author_name: &str) -> Result<u64, LibraryError> {
            self.write()?;
            let mut books = self.books()?;
            let before = books.len();
            books.retain(|_, b| b.book_author != author_name);
            Ok((before - books.len()) as u64)
        }

        async fn join_books_authors(&self) -> Result<Vec<BookAuthorRow>, LibraryError> {
            self.check()?;
            let books = self.books()?;
            let authors = self.authors()?;
            // both maps iterate in id order, matching the SQL ordering
            Ok(books
                .values()
                .flat_map(|b| {
                    authors
                        .values()
                        .filter(move |a| a.author_name == b.book_author)
                        .map(move |a| BookAuthorRow {
                            book_id: b.book_id.clone(),
                            author_id: a.author_id.clone(),
                            book_title: b.book_title.clone(),
                        })
                })
                .collect())
        }
    }
}
