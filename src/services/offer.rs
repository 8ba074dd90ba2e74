use crate::{
    error::{AppError, AppResult},
    models::{offer, resolve_id, Offer, OfferModel, OfferStatus},
    response::UpdateOutcome,
};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set,
};

#[derive(Debug, Clone)]
pub struct NewOffer {
    pub id: Option<String>,
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
}

pub struct OfferService {
    db: DatabaseConnection,
}

impl OfferService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewOffer) -> AppResult<OfferModel> {
        let offer = offer::ActiveModel {
            id: Set(resolve_id(input.id)),
            property_id: Set(input.property_id),
            title: Set(input.title),
            location: Set(input.location),
            image: Set(input.image),
            agent_email: Set(input.agent_email),
            agent_name: Set(input.agent_name),
            buyer_email: Set(input.buyer_email),
            buyer_name: Set(input.buyer_name),
            offered_price: Set(input.offered_price),
            status: Set(input.status),
            transaction_id: Set(None),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let offer = offer.insert(&self.db).await?;
        Ok(offer)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<OfferModel> {
        Offer::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list_by_buyer(&self, buyer_email: &str) -> AppResult<Vec<OfferModel>> {
        Ok(Offer::find_by_buyer_email(buyer_email).all(&self.db).await?)
    }

    pub async fn list_by_agent(&self, agent_email: &str) -> AppResult<Vec<OfferModel>> {
        Ok(Offer::find_by_agent_email(agent_email).all(&self.db).await?)
    }

    pub async fn list_sold_by_agent(&self, agent_email: &str) -> AppResult<Vec<OfferModel>> {
        Ok(Offer::find_sold_by_agent_email(agent_email)
            .all(&self.db)
            .await?)
    }

    pub async fn set_status(&self, id: &str, status: OfferStatus) -> AppResult<UpdateOutcome> {
        let result = Offer::update_many()
            .col_expr(offer::Column::Status, Expr::value(status.to_value()))
            .filter(offer::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }

    /// Status change that also stamps the gateway transaction id.
    pub async fn record_purchase(
        &self,
        id: &str,
        status: OfferStatus,
        transaction_id: Option<String>,
    ) -> AppResult<UpdateOutcome> {
        let result = Offer::update_many()
            .col_expr(offer::Column::Status, Expr::value(status.to_value()))
            .col_expr(offer::Column::TransactionId, Expr::value(transaction_id))
            .filter(offer::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }
}
