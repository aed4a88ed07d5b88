//! Create `books` table.
//! `book_author` holds an author *name* and carries no foreign key.
//! `book_detail` is serialized JSON kept as plain text.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Books::Table).to_owned()).await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Books::Table)
        .if_not_exists()
        .col(string(Books::BookId).primary_key())
        .col(string(Books::BookAuthor))
        .col(string(Books::BookTitle))
        .col(text(Books::BookDetail))
        .to_owned()
}

#[derive(DeriveIden)]
enum Books {
    Table,
    BookId,
    BookAuthor,
    BookTitle,
    BookDetail,
}
