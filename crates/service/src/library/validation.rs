//! Required-field checks applied before anything reaches the store.

use serde_json::Value;

use super::domain::{Author, AuthorInput, Book, BookInput};
use super::errors::LibraryError;

fn required(field: &str, value: Option<String>) -> Result<String, LibraryError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(LibraryError::Validation(format!("{field} is required and cannot be null or empty"))),
    }
}

pub fn validate_author(input: AuthorInput) -> Result<Author, LibraryError> {
    Ok(Author {
        author_id: required("authorId", input.author_id)?,
        author_name: required("authorName", input.author_name)?,
    })
}

/// Detail must be a non-empty JSON object; values inside it are not checked.
pub fn validate_book(input: BookInput) -> Result<Book, LibraryError> {
    let book_id = required("bookId", input.book_id)?;
    let book_author = required("bookAuthor", input.book_author)?;
    let book_title = required("bookTitle", input.book_title)?;
    let book_detail = match input.book_detail {
        Some(Value::Object(map)) if !map.is_empty() => map,
        None | Some(Value::Null) | Some(Value::Object(_)) => {
            return Err(LibraryError::Validation("bookDetail is required and cannot be null or empty".into()))
        }
        Some(_) => return Err(LibraryError::Validation("bookDetail must be a JSON object".into())),
    };
    Ok(Book { book_id, book_author, book_title, book_detail })
}
