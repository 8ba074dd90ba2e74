use crate::{
    error::{AppError, AppResult},
    models::{resolve_id, wishlist, Wishlist, WishlistModel},
    response::DeleteOutcome,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

#[derive(Debug, Clone)]
pub struct NewWishlistEntry {
    pub id: Option<String>,
    pub property_id: String,
    pub buyer_email: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent_email: String,
    pub agent_name: String,
}

#[derive(Debug)]
pub enum WishlistInsert {
    Added(WishlistModel),
    AlreadyExists,
}

pub struct WishlistService {
    db: DatabaseConnection,
}

impl WishlistService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Existence-checked insert: an entry with the same id is never duplicated.
    pub async fn add(&self, input: NewWishlistEntry) -> AppResult<WishlistInsert> {
        let id = resolve_id(input.id);

        if Wishlist::find_by_id(id.clone())
            .one(&self.db)
            .await?
            .is_some()
        {
            return Ok(WishlistInsert::AlreadyExists);
        }

        let entry = wishlist::ActiveModel {
            id: Set(id.clone()),
            property_id: Set(input.property_id),
            buyer_email: Set(input.buyer_email),
            title: Set(input.title),
            location: Set(input.location),
            image: Set(input.image),
            price: Set(input.price),
            agent_email: Set(input.agent_email),
            agent_name: Set(input.agent_name),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        match entry.insert(&self.db).await {
            Ok(entry) => Ok(WishlistInsert::Added(entry)),
            // Lost a race with an identical insert between the check and the write.
            Err(e) if is_unique_violation(&e) => Ok(WishlistInsert::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_by_buyer(&self, buyer_email: &str) -> AppResult<Vec<WishlistModel>> {
        Ok(Wishlist::find_by_buyer_email(buyer_email)
            .all(&self.db)
            .await?)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<WishlistModel> {
        Wishlist::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let result = Wishlist::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.into())
    }
}

fn is_unique_violation(err: &sea_orm::DbErr) -> bool {
    matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    )
}
