use axum::{extract::{Path, State}, Json};
use service::library::domain::{Author, AuthorInput, Book, BookAuthorRow, BookInput};
use tracing::info;

use crate::{errors::JsonApiError, routes::ServerState};

#[utoipa::path(
    get, path = "/library/authors/{author_id}", tag = "authors",
    params(("author_id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author", body = crate::openapi::AuthorDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_author(State(state): State<ServerState>, Path(author_id): Path<String>) -> Result<Json<Author>, JsonApiError> {
    match state.library.get_author(&author_id).await? {
        Some(author) => Ok(Json(author)),
        None => Err(JsonApiError::not_found(format!("author '{author_id}' not found"))),
    }
}

#[utoipa::path(
    get, path = "/library/authors", tag = "authors",
    responses((status = 200, description = "All authors ordered by id", body = [crate::openapi::AuthorDoc]))
)]
pub async fn list_authors(State(state): State<ServerState>) -> Result<Json<Vec<Author>>, JsonApiError> {
    Ok(Json(state.library.list_authors().await?))
}

#[utoipa::path(
    post, path = "/library/authors", tag = "authors",
    request_body = crate::openapi::AuthorDoc,
    responses(
        (status = 200, description = "Author Created Successfully"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create_author(State(state): State<ServerState>, Json(input): Json<AuthorInput>) -> Result<&'static str, JsonApiError> {
    let author = state.library.create_author(input).await?;
    info!(author_id = %author.author_id, "create author request handled");
    Ok("Author Created Successfully")
}

#[utoipa::path(
    put, path = "/library/authors/{author_id}", tag = "authors",
    params(("author_id" = String, Path, description = "Author id")),
    request_body = crate::openapi::AuthorDoc,
    responses(
        (status = 200, description = "Author Updated Successfully"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_author(
    State(state): State<ServerState>,
    Path(author_id): Path<String>,
    Json(input): Json<AuthorInput>,
) -> Result<&'static str, JsonApiError> {
    state.library.update_author(&author_id, input).await?;
    Ok("Author Updated Successfully")
}

#[utoipa::path(
    delete, path = "/library/authors/{author_id}", tag = "authors",
    params(("author_id" = String, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author Deleted Successfully"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_author(State(state): State<ServerState>, Path(author_id): Path<String>) -> Result<&'static str, JsonApiError> {
    state.library.delete_author(&author_id).await?;
    Ok("Author Deleted Successfully")
}

#[utoipa::path(
    get, path = "/library/books/{book_id}", tag = "books",
    params(("book_id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book", body = crate::openapi::BookDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Stored detail could not be decoded")
    )
)]
pub async fn get_book(State(state): State<ServerState>, Path(book_id): Path<String>) -> Result<Json<Book>, JsonApiError> {
    match state.library.get_book(&book_id).await? {
        Some(book) => Ok(Json(book)),
        None => Err(JsonApiError::not_found(format!("book '{book_id}' not found"))),
    }
}

#[utoipa::path(
    get, path = "/library/books", tag = "books",
    responses((status = 200, description = "All books ordered by id", body = [crate::openapi::BookDoc]))
)]
pub async fn list_books(State(state): State<ServerState>) -> Result<Json<Vec<Book>>, JsonApiError> {
    Ok(Json(state.library.list_books().await?))
}

#[utoipa::path(
    post, path = "/library/books", tag = "books",
    request_body = crate::openapi::BookDoc,
    responses(
        (status = 200, description = "Book Created Successfully"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn create_book(State(state): State<ServerState>, Json(input): Json<BookInput>) -> Result<&'static str, JsonApiError> {
    let book = state.library.create_book(input).await?;
    info!(book_id = %book.book_id, "create book request handled");
    Ok("Book Created Successfully")
}

#[utoipa::path(
    put, path = "/library/books/{book_id}", tag = "books",
    params(("book_id" = String, Path, description = "Book id")),
    request_body = crate::openapi::BookDoc,
    responses(
        (status = 200, description = "Book Updated Successfully"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_book(
    State(state): State<ServerState>,
    Path(book_id): Path<String>,
    Json(input): Json<BookInput>,
) -> Result<&'static str, JsonApiError> {
    state.library.update_book(&book_id, input).await?;
    Ok("Book Updated Successfully")
}

#[utoipa::path(
    delete, path = "/library/books/{book_id}", tag = "books",
    params(("book_id" = String, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book Deleted Successfully"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_book(State(state): State<ServerState>, Path(book_id): Path<String>) -> Result<&'static str, JsonApiError> {
    state.library.delete_book(&book_id).await?;
    Ok("Book Deleted Successfully")
}

#[utoipa::path(
    get, path = "/library/books-join-authors", tag = "books",
    responses((status = 200, description = "Books matched to authors by name", body = [crate::openapi::BookAuthorRowDoc]))
)]
pub async fn books_join_authors(State(state): State<ServerState>) -> Result<Json<Vec<BookAuthorRow>>, JsonApiError> {
    Ok(Json(state.library.books_join_authors().await?))
}

#[utoipa::path(
    delete, path = "/library/deleteBooksByAuthorName/{author_name}", tag = "books",
    params(("author_name" = String, Path, description = "Exact author name stored on the books")),
    responses((status = 200, description = "Deleted count, or a note that nothing matched"))
)]
pub async fn delete_books_by_author_name(
    State(state): State<ServerState>,
    Path(author_name): Path<String>,
) -> Result<String, JsonApiError> {
    let outcome = state.library.delete_books_by_author_name(&author_name).await?;
    Ok(outcome.message())
}
