use models::errors::ModelError;
use thiserror::Error;

/// Business errors for library workflows
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0} already exists")]
    Conflict(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("stored book detail is corrupt: {0}")]
    DetailDecode(String),
    #[error("store error: {0}")]
    Store(String),
}

impl LibraryError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            LibraryError::Validation(_) => 1001,
            LibraryError::Conflict(_) => 1002,
            LibraryError::NotFound(_) => 1003,
            LibraryError::DetailDecode(_) => 1101,
            LibraryError::Store(_) => 1200,
        }
    }

    pub fn author_not_found(author_id: &str) -> Self { Self::NotFound(format!("author '{author_id}'")) }
    pub fn book_not_found(book_id: &str) -> Self { Self::NotFound(format!("book '{book_id}'")) }
}

impl From<ModelError> for LibraryError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => LibraryError::Validation(m),
            ModelError::NotFound(m) => LibraryError::NotFound(m),
            ModelError::Conflict(m) => LibraryError::Conflict(m),
            ModelError::DetailDecode(m) => LibraryError::DetailDecode(m),
            ModelError::Db(m) => LibraryError::Store(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_category() {
        assert!(matches!(LibraryError::from(ModelError::Db("boom".into())), LibraryError::Store(_)));
        assert!(matches!(
            LibraryError::from(ModelError::DetailDecode("eof".into())),
            LibraryError::DetailDecode(_)
        ));
        assert_eq!(LibraryError::from(ModelError::NotFound("book 'B1'".into())).to_string(), "book 'B1' not found");
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            LibraryError::Validation(String::new()).code(),
            LibraryError::Conflict(String::new()).code(),
            LibraryError::NotFound(String::new()).code(),
            LibraryError::DetailDecode(String::new()).code(),
            LibraryError::Store(String::new()).code(),
        ];
        let mut dedup = codes.to_vec();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), codes.len());
    }
}
