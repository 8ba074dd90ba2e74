use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub property_id: String,
    pub property_title: Option<String>,
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub reviewer_image: Option<String>,
    pub agent_name: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rating: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_by_reviewer_name(name: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::ReviewerName.eq(name))
            .order_by_asc(Column::CreatedAt)
    }
}
