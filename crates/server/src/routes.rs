use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::library::{repo::seaorm::SeaOrmLibraryRepository, LibraryService};

use crate::openapi::ApiDoc;

pub mod library;

#[derive(Clone)]
pub struct ServerState {
    pub library: Arc<LibraryService<SeaOrmLibraryRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmLibraryRepository::new(db));
        Self { library: Arc::new(LibraryService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API document and `/library`.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let library_routes = Router::new()
        .route("/authors", get(library::list_authors).post(library::create_author))
        .route(
            "/authors/:author_id",
            get(library::get_author).put(library::update_author).delete(library::delete_author),
        )
        .route("/books", get(library::list_books).post(library::create_book))
        .route(
            "/books/:book_id",
            get(library::get_book).put(library::update_book).delete(library::delete_book),
        )
        .route("/books-join-authors", get(library::books_join_authors))
        .route("/deleteBooksByAuthorName/:author_name", delete(library::delete_books_by_author_name));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/library", library_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and transport failures at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
