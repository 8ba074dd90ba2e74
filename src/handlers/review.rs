use crate::error::{validation_error, AppError, AppResult};
use crate::models::ReviewModel;
use crate::response::{ApiResponse, DeleteOutcome};
use crate::services::review::{NewReview, ReviewService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    pub property_title: Option<String>,
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub reviewer_image: Option<String>,
    pub agent_name: Option<String>,
    pub description: String,
    pub rating: i32,
    pub created_at: String,
}

impl From<ReviewModel> for ReviewResponse {
    fn from(r: ReviewModel) -> Self {
        Self {
            id: r.id,
            property_id: r.property_id,
            property_title: r.property_title,
            reviewer_name: r.reviewer_name,
            reviewer_email: r.reviewer_email,
            reviewer_image: r.reviewer_image,
            agent_name: r.agent_name,
            description: r.description,
            rating: r.rating,
            created_at: r.created_at.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,
    pub property_title: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub reviewer_image: Option<String>,
    pub agent_name: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    /// 1 to 5 stars
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
}

#[utoipa::path(
    post,
    path = "/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 200, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "reviews"
)]
pub async fn create_review(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let review = ReviewService::new(db)
        .create(NewReview {
            id: payload.id,
            property_id: payload.property_id,
            property_title: payload.property_title,
            reviewer_name: payload.reviewer_name,
            reviewer_email: payload.reviewer_email,
            reviewer_image: payload.reviewer_image,
            agent_name: payload.agent_name,
            description: payload.description,
            rating: payload.rating,
        })
        .await?;

    Ok(ApiResponse::ok(ReviewResponse::from(review)))
}

#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "All reviews", body = Vec<ReviewResponse>),
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewService::new(db).list_all().await?;
    let items: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    get,
    path = "/reviews/{username}",
    params(("username" = String, Path, description = "Reviewer name")),
    responses(
        (status = 200, description = "Reviews written by this reviewer", body = Vec<ReviewResponse>),
    ),
    tag = "reviews"
)]
pub async fn list_reviews_by_reviewer(
    Extension(db): Extension<DatabaseConnection>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewService::new(db).list_by_reviewer(&username).await?;
    let items: Vec<ReviewResponse> = reviews.into_iter().map(ReviewResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    delete,
    path = "/review/{id}",
    params(("id" = String, Path, description = "Review id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteOutcome),
    ),
    tag = "reviews"
)]
pub async fn delete_review(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = ReviewService::new(db).delete(&id).await?;
    Ok(ApiResponse::ok(outcome))
}
