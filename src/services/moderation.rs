use crate::{
    error::AppResult,
    models::{advertisement, property, Advertisement, Property},
    response::DeleteOutcome,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Serialize;
use utoipa::ToSchema;

/// Result of purging a flagged agent's listings; the two deletes are
/// independent and reported separately.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurgeOutcome {
    pub delete_ads: DeleteOutcome,
    pub delete_properties: DeleteOutcome,
}

pub struct ModerationService {
    db: DatabaseConnection,
}

impl ModerationService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Remove the given listings and any advertisements promoting them.
    ///
    /// Not atomic: if the second delete fails the first stays applied.
    pub async fn purge_listings(&self, listing_ids: &[String]) -> AppResult<PurgeOutcome> {
        let delete_ads = Advertisement::delete_many()
            .filter(advertisement::Column::PropertyId.is_in(listing_ids.iter().cloned()))
            .exec(&self.db)
            .await?;

        let delete_properties = Property::delete_many()
            .filter(property::Column::Id.is_in(listing_ids.iter().cloned()))
            .exec(&self.db)
            .await?;

        tracing::info!(
            "Purged {} listings and {} advertisements",
            delete_properties.rows_affected,
            delete_ads.rows_affected
        );

        Ok(PurgeOutcome {
            delete_ads: delete_ads.into(),
            delete_properties: delete_properties.into(),
        })
    }
}
