use crate::{
    error::{AppError, AppResult},
    models::{property, resolve_id, EmbeddedReview, ListingReviews, ListingStatus, Property, PropertyModel},
    response::{DeleteOutcome, UpdateOutcome},
};
use sea_orm::{
    sea_query::Expr, ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, Statement,
};

#[derive(Debug, Clone)]
pub struct NewProperty {
    pub id: Option<String>,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent_email: String,
    pub agent_name: String,
    pub agent_image: Option<String>,
    pub status: ListingStatus,
}

/// Fields an agent may edit after submission.
#[derive(Debug, Clone)]
pub struct PropertyDetails {
    pub title: String,
    pub location: String,
    pub price: f64,
    pub image: Option<String>,
}

pub struct PropertyService {
    db: DatabaseConnection,
}

impl PropertyService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewProperty) -> AppResult<PropertyModel> {
        let listing = property::ActiveModel {
            id: Set(resolve_id(input.id)),
            title: Set(input.title),
            location: Set(input.location),
            image: Set(input.image),
            price: Set(input.price),
            agent_email: Set(input.agent_email),
            agent_name: Set(input.agent_name),
            agent_image: Set(input.agent_image),
            status: Set(input.status),
            ads_status: Set(false),
            is_deleted: Set(false),
            reviews: Set(ListingReviews::default()),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        let listing = listing.insert(&self.db).await?;
        Ok(listing)
    }

    pub async fn list_all(&self) -> AppResult<Vec<PropertyModel>> {
        let listings = Property::find()
            .order_by_asc(property::Column::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(listings)
    }

    pub async fn list_listed(&self) -> AppResult<Vec<PropertyModel>> {
        let listings = Property::find_listed().all(&self.db).await?;
        Ok(listings)
    }

    /// Direct lookup; soft-deleted listings are still returned.
    pub async fn get_by_id(&self, id: &str) -> AppResult<PropertyModel> {
        Property::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list_by_agent(
        &self,
        agent_email: &str,
        include_deleted: bool,
    ) -> AppResult<Vec<PropertyModel>> {
        let query = if include_deleted {
            Property::find_by_agent_email(agent_email)
        } else {
            Property::find_active_by_agent_email(agent_email)
        };
        Ok(query.all(&self.db).await?)
    }

    pub async fn search(&self, term: &str) -> AppResult<Vec<PropertyModel>> {
        let listings = Property::search_title(term).all(&self.db).await?;
        Ok(listings)
    }

    pub async fn update_details(
        &self,
        id: &str,
        details: PropertyDetails,
    ) -> AppResult<UpdateOutcome> {
        let result = Property::update_many()
            .col_expr(property::Column::Title, Expr::value(details.title))
            .col_expr(property::Column::Location, Expr::value(details.location))
            .col_expr(property::Column::Price, Expr::value(details.price))
            .col_expr(property::Column::Image, Expr::value(details.image))
            .filter(property::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }

    pub async fn set_status(&self, id: &str, status: ListingStatus) -> AppResult<UpdateOutcome> {
        let result = Property::update_many()
            .col_expr(property::Column::Status, Expr::value(status.to_value()))
            .filter(property::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }

    pub async fn set_ads_status(&self, id: &str, advertised: bool) -> AppResult<UpdateOutcome> {
        let result = Property::update_many()
            .col_expr(property::Column::AdsStatus, Expr::value(advertised))
            .filter(property::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }

    /// Hide from default listings without removing the row.
    pub async fn soft_delete(&self, id: &str) -> AppResult<UpdateOutcome> {
        let result = Property::update_many()
            .col_expr(property::Column::IsDeleted, Expr::value(true))
            .filter(property::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let result = Property::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }

    /// Push one review onto the listing's embedded list in a single statement.
    pub async fn append_review(
        &self,
        id: &str,
        review: EmbeddedReview,
    ) -> AppResult<UpdateOutcome> {
        let entry = serde_json::to_value(vec![review])
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode review: {}", e)))?;

        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                sea_orm::DatabaseBackend::Postgres,
                "UPDATE properties SET reviews = reviews || $1::jsonb WHERE id = $2",
                vec![entry.into(), id.into()],
            ))
            .await?;
        Ok(UpdateOutcome::from_rows(result.rows_affected()))
    }
}
