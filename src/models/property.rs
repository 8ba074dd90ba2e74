use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "bought")]
    Bought,
}

/// A review as stored inside its listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedReview {
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: Option<String>,
    #[serde(default)]
    pub reviewer_image: Option<String>,
    pub description: String,
    #[serde(default)]
    pub rating: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
pub struct ListingReviews(pub Vec<EmbeddedReview>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent_email: String,
    pub agent_name: String,
    pub agent_image: Option<String>,
    pub status: ListingStatus,
    pub ads_status: bool,
    pub is_deleted: bool,
    #[sea_orm(column_type = "JsonBinary")]
    pub reviews: ListingReviews,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Default public view: verified and not soft-deleted.
    pub fn find_listed() -> Select<Entity> {
        Self::find()
            .filter(Column::Status.eq(ListingStatus::Verified))
            .filter(Column::IsDeleted.eq(false))
            .order_by_asc(Column::CreatedAt)
    }

    /// Every listing the agent ever submitted, soft-deleted ones included.
    pub fn find_by_agent_email(email: &str) -> Select<Entity> {
        Self::find()
            .filter(Column::AgentEmail.eq(email))
            .order_by_asc(Column::CreatedAt)
    }

    pub fn find_active_by_agent_email(email: &str) -> Select<Entity> {
        Self::find_by_agent_email(email).filter(Column::IsDeleted.eq(false))
    }

    /// Case-insensitive substring match on the title.
    pub fn search_title(term: &str) -> Select<Entity> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        Self::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(Column::Title)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .order_by_asc(Column::CreatedAt)
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
