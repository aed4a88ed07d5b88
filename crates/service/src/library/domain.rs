use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use models::detail::Detail;

/// Author as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub author_id: String,
    pub author_name: String,
}

/// Book as exposed over the API. `book_author` is the author's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub book_id: String,
    pub book_author: String,
    pub book_title: String,
    pub book_detail: Detail,
}

/// Unvalidated author payload. Fields are optional so that `null` and
/// missing values reach validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub author_id: Option<String>,
    pub author_name: Option<String>,
}

/// Unvalidated book payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub book_id: Option<String>,
    pub book_author: Option<String>,
    pub book_title: Option<String>,
    pub book_detail: Option<Value>,
}

impl From<Author> for AuthorInput {
    fn from(a: Author) -> Self {
        Self { author_id: Some(a.author_id), author_name: Some(a.author_name) }
    }
}

impl From<Book> for BookInput {
    fn from(b: Book) -> Self {
        Self {
            book_id: Some(b.book_id),
            book_author: Some(b.book_author),
            book_title: Some(b.book_title),
            book_detail: Some(Value::Object(b.book_detail)),
        }
    }
}

/// Row of the books-join-authors view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAuthorRow {
    pub book_id: String,
    pub author_id: String,
    pub book_title: String,
}

/// Result of removing all books filed under one author name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDeleteOutcome {
    pub author_name: String,
    pub deleted: u64,
}

impl BulkDeleteOutcome {
    pub fn message(&self) -> String {
        if self.deleted > 0 {
            format!("Successfully deleted {} books for author: {}", self.deleted, self.author_name)
        } else {
            format!("No books found for author: {}", self.author_name)
        }
    }
}
