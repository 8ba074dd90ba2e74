use crate::{
    error::AppResult,
    models::{resolve_id, review, Review, ReviewModel},
    response::DeleteOutcome,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

#[derive(Debug, Clone)]
pub struct NewReview {
    pub id: Option<String>,
    pub property_id: String,
    pub property_title: Option<String>,
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub reviewer_image: Option<String>,
    pub agent_name: Option<String>,
    pub description: String,
    pub rating: i32,
}

pub struct ReviewService {
    db: DatabaseConnection,
}

impl ReviewService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewReview) -> AppResult<ReviewModel> {
        let review = review::ActiveModel {
            id: Set(resolve_id(input.id)),
            property_id: Set(input.property_id),
            property_title: Set(input.property_title),
            reviewer_name: Set(input.reviewer_name),
            reviewer_email: Set(input.reviewer_email),
            reviewer_image: Set(input.reviewer_image),
            agent_name: Set(input.agent_name),
            description: Set(input.description),
            rating: Set(input.rating),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        Ok(review.insert(&self.db).await?)
    }

    pub async fn list_all(&self) -> AppResult<Vec<ReviewModel>> {
        Ok(Review::find()
            .order_by_asc(review::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn list_by_reviewer(&self, reviewer_name: &str) -> AppResult<Vec<ReviewModel>> {
        Ok(Review::find_by_reviewer_name(reviewer_name)
            .all(&self.db)
            .await?)
    }

    pub async fn delete(&self, id: &str) -> AppResult<DeleteOutcome> {
        let result = Review::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(result.into())
    }
}
