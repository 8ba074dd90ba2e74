use crate::{
    error::AppResult,
    models::{advertisement, resolve_id, Advertisement, AdvertisementModel},
    response::DeleteOutcome,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, Set, Statement, TransactionTrait,
};

/// Advisory lock key serializing slot allocation across connections.
const SLOT_LOCK_KEY: i64 = 0x6164_7665_7274; // "advert"

#[derive(Debug, Clone)]
pub struct NewAdvertisement {
    pub id: Option<String>,
    pub property_id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent_email: String,
    pub agent_name: String,
}

#[derive(Debug)]
pub enum AdvertisementInsert {
    Added(AdvertisementModel),
    SlotsFull,
}

pub struct AdvertisementService {
    db: DatabaseConnection,
}

impl AdvertisementService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert unless `MAX_SLOTS` advertisements already exist.
    ///
    /// Count and insert run under a transaction-scoped advisory lock, so
    /// concurrent callers cannot push the table past the cap.
    pub async fn add(&self, input: NewAdvertisement) -> AppResult<AdvertisementInsert> {
        let txn = self.db.begin().await?;

        txn.execute(Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            "SELECT pg_advisory_xact_lock($1)",
            vec![SLOT_LOCK_KEY.into()],
        ))
        .await?;

        let taken = Advertisement::find().count(&txn).await?;
        if taken >= advertisement::MAX_SLOTS {
            txn.rollback().await?;
            tracing::info!(
                "Advertisement for listing {} rejected: {} of {} slots taken",
                input.property_id,
                taken,
                advertisement::MAX_SLOTS
            );
            return Ok(AdvertisementInsert::SlotsFull);
        }

        let ad = advertisement::ActiveModel {
            id: Set(resolve_id(input.id)),
            property_id: Set(input.property_id),
            title: Set(input.title),
            location: Set(input.location),
            image: Set(input.image),
            price: Set(input.price),
            agent_email: Set(input.agent_email),
            agent_name: Set(input.agent_name),
            created_at: Set(chrono::Utc::now().naive_utc()),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(AdvertisementInsert::Added(ad))
    }

    pub async fn list_all(&self) -> AppResult<Vec<AdvertisementModel>> {
        Ok(Advertisement::find()
            .order_by_asc(advertisement::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let result = Advertisement::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }
}
