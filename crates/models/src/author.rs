use sea_orm::{entity::prelude::*, sea_query::Expr, DatabaseConnection, QueryOrder, Set};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub author_id: String,
    pub author_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn find(db: &DatabaseConnection, author_id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(author_id).one(db).await?)
}

/// All authors ordered by id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::AuthorId).all(db).await?)
}

/// Insert a new author. A duplicate id surfaces as `ModelError::Conflict`.
pub async fn create(db: &DatabaseConnection, author_id: &str, author_name: &str) -> Result<Model, ModelError> {
    let am = ActiveModel {
        author_id: Set(author_id.to_string()),
        author_name: Set(author_name.to_string()),
    };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(Model { author_id: author_id.to_string(), author_name: author_name.to_string() })
}

/// Replace the author's name. Zero affected rows is `ModelError::NotFound`.
pub async fn update_name(db: &DatabaseConnection, author_id: &str, author_name: &str) -> Result<Model, ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::AuthorName, Expr::value(author_name.to_string()))
        .filter(Column::AuthorId.eq(author_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("author '{author_id}'")));
    }
    Ok(Model { author_id: author_id.to_string(), author_name: author_name.to_string() })
}

pub async fn delete(db: &DatabaseConnection, author_id: &str) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(author_id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("author '{author_id}'")));
    }
    Ok(())
}
