use sea_orm::{
    entity::prelude::*, sea_query::Expr, DatabaseConnection, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, Set,
};

use crate::{author, detail, errors::ModelError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_id: String,
    /// Author *name*, matched against `authors.author_name`.
    pub book_author: String,
    pub book_title: String,
    /// Serialized JSON object, see [`crate::detail`].
    #[sea_orm(column_type = "Text")]
    pub book_detail: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { AuthorByName }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AuthorByName => Entity::belongs_to(author::Entity)
                .from(Column::BookAuthor)
                .to(author::Column::AuthorName)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn detail(&self) -> Result<detail::Detail, ModelError> {
        detail::decode(&self.book_detail)
    }
}

/// One row of the book/author name join.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct JoinRow {
    pub book_id: String,
    pub author_id: String,
    pub book_title: String,
}

pub async fn find(db: &DatabaseConnection, book_id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(book_id).one(db).await?)
}

/// All books ordered by id.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::BookId).all(db).await?)
}

pub async fn create(
    db: &DatabaseConnection,
    book_id: &str,
    book_author: &str,
    book_title: &str,
    book_detail: &detail::Detail,
) -> Result<Model, ModelError> {
    let m = Model {
        book_id: book_id.to_string(),
        book_author: book_author.to_string(),
        book_title: book_title.to_string(),
        book_detail: detail::encode(book_detail)?,
    };
    let am = ActiveModel {
        book_id: Set(m.book_id.clone()),
        book_author: Set(m.book_author.clone()),
        book_title: Set(m.book_title.clone()),
        book_detail: Set(m.book_detail.clone()),
    };
    Entity::insert(am).exec_without_returning(db).await?;
    Ok(m)
}

/// Full replacement of author, title and detail; the id is fixed.
pub async fn update(
    db: &DatabaseConnection,
    book_id: &str,
    book_author: &str,
    book_title: &str,
    book_detail: &detail::Detail,
) -> Result<Model, ModelError> {
    let encoded = detail::encode(book_detail)?;
    let res = Entity::update_many()
        .col_expr(Column::BookAuthor, Expr::value(book_author.to_string()))
        .col_expr(Column::BookTitle, Expr::value(book_title.to_string()))
        .col_expr(Column::BookDetail, Expr::value(encoded.clone()))
        .filter(Column::BookId.eq(book_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("book '{book_id}'")));
    }
    Ok(Model {
        book_id: book_id.to_string(),
        book_author: book_author.to_string(),
        book_title: book_title.to_string(),
        book_detail: encoded,
    })
}

pub async fn delete(db: &DatabaseConnection, book_id: &str) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(book_id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound(format!("book '{book_id}'")));
    }
    Ok(())
}

/// Remove every book whose `book_author` equals `author_name`. Returns the count.
pub async fn delete_by_author(db: &DatabaseConnection, author_name: &str) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::BookAuthor.eq(author_name))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Books joined to authors on `book_author = author_name` (exact,
/// case-sensitive). Duplicate author names fan out into several rows.
pub async fn join_authors(db: &DatabaseConnection) -> Result<Vec<JoinRow>, ModelError> {
    let rows = Entity::find()
        .select_only()
        .column(Column::BookId)
        .column(author::Column::AuthorId)
        .column(Column::BookTitle)
        .join(JoinType::InnerJoin, Relation::AuthorByName.def())
        .order_by_asc(Column::BookId)
        .order_by_asc(author::Column::AuthorId)
        .into_model::<JoinRow>()
        .all(db)
        .await?;
    Ok(rows)
}
