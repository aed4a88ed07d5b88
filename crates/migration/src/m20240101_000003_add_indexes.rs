use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Books: lookup by author name (join view, bulk delete)
        manager
            .create_index(
                Index::create()
                    .name("idx_books_book_author")
                    .table(Books::Table)
                    .col(Books::BookAuthor)
                    .to_owned(),
            )
            .await?;

        // Authors: join target, deliberately not unique
        manager
            .create_index(
                Index::create()
                    .name("idx_authors_author_name")
                    .table(Authors::Table)
                    .col(Authors::AuthorName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_books_book_author").table(Books::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_authors_author_name").table(Authors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Books { Table, BookAuthor }

#[derive(DeriveIden)]
enum Authors { Table, AuthorName }
