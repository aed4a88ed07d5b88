use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct AuthorDoc { pub author_id: String, pub author_name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct BookDoc {
    pub book_id: String,
    /// Author name, not id
    pub book_author: String,
    pub book_title: String,
    /// Any non-empty JSON object
    #[schema(value_type = Object)]
    pub book_detail: serde_json::Value,
}

#[derive(ToSchema)]
pub struct BookAuthorRowDoc { pub book_id: String, pub author_id: String, pub book_title: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::library::get_author,
        crate::routes::library::list_authors,
        crate::routes::library::create_author,
        crate::routes::library::update_author,
        crate::routes::library::delete_author,
        crate::routes::library::get_book,
        crate::routes::library::list_books,
        crate::routes::library::create_book,
        crate::routes::library::update_book,
        crate::routes::library::delete_book,
        crate::routes::library::books_join_authors,
        crate::routes::library::delete_books_by_author_name,
    ),
    components(
        schemas(
            HealthResponse,
            AuthorDoc,
            BookDoc,
            BookAuthorRowDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "authors"),
        (name = "books")
    )
)]
pub struct ApiDoc;
