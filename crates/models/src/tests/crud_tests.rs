use crate::db::connect_in_memory;
use crate::detail::Detail;
use crate::errors::ModelError;
use crate::{author, book};
use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use serde_json::json;

fn detail(v: serde_json::Value) -> Detail {
    v.as_object().cloned().expect("object literal")
}

/// Test author CRUD operations
#[tokio::test]
async fn test_author_crud() -> Result<()> {
    let db = connect_in_memory().await?;

    let created = author::create(&db, "A101", "James Clear").await?;
    assert_eq!(created.author_name, "James Clear");

    let found = author::find(&db, "A101").await?.expect("author exists");
    assert_eq!(found, created);

    let updated = author::update_name(&db, "A101", "J. Clear").await?;
    assert_eq!(updated.author_name, "J. Clear");
    assert_eq!(author::find(&db, "A101").await?.unwrap().author_name, "J. Clear");

    author::delete(&db, "A101").await?;
    assert!(author::find(&db, "A101").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_author_duplicate_id_is_conflict() -> Result<()> {
    let db = connect_in_memory().await?;
    author::create(&db, "A1", "X").await?;

    let err = author::create(&db, "A1", "Y").await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    assert_eq!(author::find(&db, "A1").await?.unwrap().author_name, "X");
    Ok(())
}

#[tokio::test]
async fn test_zero_row_mutations_are_not_found() -> Result<()> {
    let db = connect_in_memory().await?;

    assert!(matches!(author::update_name(&db, "nope", "N").await, Err(ModelError::NotFound(_))));
    assert!(matches!(author::delete(&db, "nope").await, Err(ModelError::NotFound(_))));
    let d = detail(json!({"genre": "Fiction"}));
    assert!(matches!(book::update(&db, "nope", "A", "T", &d).await, Err(ModelError::NotFound(_))));
    assert!(matches!(book::delete(&db, "nope").await, Err(ModelError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn test_lists_are_ordered_by_id() -> Result<()> {
    let db = connect_in_memory().await?;
    for (id, name) in [("A3", "C"), ("A1", "A"), ("A2", "B")] {
        author::create(&db, id, name).await?;
    }
    let d = detail(json!({"k": "v"}));
    for id in ["B2", "B9", "B1"] {
        book::create(&db, id, "A", "T", &d).await?;
    }

    let authors: Vec<_> = author::list(&db).await?.into_iter().map(|a| a.author_id).collect();
    assert_eq!(authors, ["A1", "A2", "A3"]);
    let books: Vec<_> = book::list(&db).await?.into_iter().map(|b| b.book_id).collect();
    assert_eq!(books, ["B1", "B2", "B9"]);
    Ok(())
}

/// Test book CRUD operations including the detail column
#[tokio::test]
async fn test_book_crud_and_detail() -> Result<()> {
    let db = connect_in_memory().await?;
    let d = detail(json!({"publishing year": 2018, "genre": "Self-Help", "tags": ["habits", "productivity"]}));

    book::create(&db, "B101", "James Clear", "Atomic Habits", &d).await?;
    let found = book::find(&db, "B101").await?.expect("book exists");
    assert_eq!(found.book_title, "Atomic Habits");
    assert_eq!(found.detail()?, d);

    let d2 = detail(json!({"genre": "Non-Fiction"}));
    book::update(&db, "B101", "James Clear", "Atomic Habits (2nd ed.)", &d2).await?;
    let found = book::find(&db, "B101").await?.unwrap();
    assert_eq!(found.book_title, "Atomic Habits (2nd ed.)");
    assert_eq!(found.detail()?, d2);

    book::delete(&db, "B101").await?;
    assert!(book::find(&db, "B101").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_corrupt_detail_fails_the_row() -> Result<()> {
    let db = connect_in_memory().await?;
    db.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        "INSERT INTO books (book_id, book_author, book_title, book_detail) VALUES ('B1', 'A', 'T', '{oops')".to_string(),
    ))
    .await?;

    let row = book::find(&db, "B1").await?.expect("row is readable as text");
    assert!(matches!(row.detail(), Err(ModelError::DetailDecode(_))));
    Ok(())
}

#[tokio::test]
async fn test_join_matches_names_exactly() -> Result<()> {
    let db = connect_in_memory().await?;
    let d = detail(json!({"genre": "Self-Help"}));

    author::create(&db, "A101", "James Clear").await?;
    author::create(&db, "A102", "Darius Foroux").await?;
    book::create(&db, "B101", "James Clear", "Atomic Habits", &d).await?;
    book::create(&db, "B102", "James Clear", "Clear Thinking", &d).await?;
    book::create(&db, "B103", "james clear", "Lowercase", &d).await?;
    book::create(&db, "B104", "Nobody", "Orphan", &d).await?;

    let rows = book::join_authors(&db).await?;
    let got: Vec<_> = rows.iter().map(|r| (r.book_id.as_str(), r.author_id.as_str(), r.book_title.as_str())).collect();
    assert_eq!(got, [("B101", "A101", "Atomic Habits"), ("B102", "A101", "Clear Thinking")]);
    Ok(())
}

#[tokio::test]
async fn test_join_fans_out_on_duplicate_names() -> Result<()> {
    let db = connect_in_memory().await?;
    let d = detail(json!({"genre": "Fiction"}));

    author::create(&db, "A1", "Same Name").await?;
    author::create(&db, "A2", "Same Name").await?;
    book::create(&db, "B1", "Same Name", "Twice", &d).await?;

    let rows = book::join_authors(&db).await?;
    let ids: Vec<_> = rows.iter().map(|r| r.author_id.as_str()).collect();
    assert_eq!(ids, ["A1", "A2"]);
    assert!(rows.iter().all(|r| r.book_id == "B1"));
    Ok(())
}

#[tokio::test]
async fn test_join_is_empty_without_matches() -> Result<()> {
    let db = connect_in_memory().await?;
    author::create(&db, "A1", "Someone").await?;
    book::create(&db, "B1", "Someone Else", "T", &detail(json!({"k": 1}))).await?;
    assert!(book::join_authors(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_delete_by_author_counts_rows() -> Result<()> {
    let db = connect_in_memory().await?;
    let d = detail(json!({"k": 1}));
    book::create(&db, "B1", "Heidi Author", "One", &d).await?;
    book::create(&db, "B2", "Heidi Author", "Two", &d).await?;
    book::create(&db, "B3", "Other", "Three", &d).await?;

    assert_eq!(book::delete_by_author(&db, "Heidi Author").await?, 2);
    assert_eq!(book::delete_by_author(&db, "Heidi Author").await?, 0);
    let left: Vec<_> = book::list(&db).await?.into_iter().map(|b| b.book_id).collect();
    assert_eq!(left, ["B3"]);
    Ok(())
}
