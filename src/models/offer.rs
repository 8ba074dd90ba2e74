use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "bought")]
    Bought,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "offers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub property_id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub agent_email: String,
    pub agent_name: String,
    pub buyer_email: String,
    pub buyer_name: Option<String>,
    pub offered_price: f64,
    pub status: OfferStatus,
    pub transaction_id: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_by_buyer_email(email: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::BuyerEmail.eq(email))
            .order_by_asc(Column::CreatedAt)
    }

    /// Offers made on listings the agent owns.
    pub fn find_by_agent_email(email: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::AgentEmail.eq(email))
            .order_by_asc(Column::CreatedAt)
    }

    pub fn find_sold_by_agent_email(email: &str) -> Select<Entity> {
        Self::find_by_agent_email(email).filter(Column::Status.eq(OfferStatus::Bought))
    }
}
