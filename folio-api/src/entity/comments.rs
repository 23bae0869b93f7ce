use sea_orm::entity::prelude::*;

// Comments point at either content table through (content_type, content_id),
// so there is no foreign key relation to declare here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub content_type: String,
    pub content_id: i32,
    pub author_name: String,
    pub author_email: Option<String>,
    pub content: String,
    pub created_date: DateTime,
    pub is_approved: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
