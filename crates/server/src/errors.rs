use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::library::LibraryError;
use tracing::error;

/// JSON error body: `{"error": <title>, "detail": <message>}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, detail: Option<String>) -> Self {
        Self { status, error, detail }
    }

    pub fn not_found(detail: String) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not Found", Some(detail))
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::Map::new();
        body.insert("error".into(), self.error.into());
        if let Some(detail) = self.detail {
            body.insert("detail".into(), detail.into());
        }
        (self.status, Json(serde_json::Value::Object(body))).into_response()
    }
}

/// Client errors carry their message; server errors are logged and returned
/// without internal text.
impl From<LibraryError> for JsonApiError {
    fn from(e: LibraryError) -> Self {
        match e {
            LibraryError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())),
            LibraryError::Conflict(_) => Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string())),
            LibraryError::NotFound(_) => Self::not_found(e.to_string()),
            LibraryError::DetailDecode(_) | LibraryError::Store(_) => {
                error!(code = e.code(), err = %e, "library operation failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_fixed() {
        let cases = [
            (LibraryError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (LibraryError::Conflict("author 'A1'".into()), StatusCode::CONFLICT),
            (LibraryError::NotFound("author 'A1'".into()), StatusCode::NOT_FOUND),
            (LibraryError::DetailDecode("eof".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (LibraryError::Store("connection reset".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn server_errors_hide_internal_text() {
        let e = JsonApiError::from(LibraryError::Store("relation \"books\" does not exist".into()));
        assert!(e.detail.is_none());
        let e = JsonApiError::from(LibraryError::Conflict("author 'A1'".into()));
        assert_eq!(e.detail.as_deref(), Some("author 'A1' already exists"));
    }
}
