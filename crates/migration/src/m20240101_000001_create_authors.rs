//! Create `authors` table.
//!
//! Ids are client-supplied strings, so the key is not generated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Authors::Table).to_owned()).await
    }
}

/// Unbounded `varchar` columns: names carry no length limit.
fn table() -> TableCreateStatement {
    Table::create()
        .table(Authors::Table)
        .if_not_exists()
        .col(string(Authors::AuthorId).primary_key())
        .col(string(Authors::AuthorName))
        .to_owned()
}

#[derive(DeriveIden)]
enum Authors { Table, AuthorId, AuthorName }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn postgres_columns_have_no_length_limit() {
        let sql = table().to_string(PostgresQueryBuilder);
        assert!(sql.contains("varchar"), "{sql}");
        assert!(!sql.contains("varchar("), "{sql}");
    }
}
