use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::services::moderation::{ModerationService, PurgeOutcome};
use crate::services::property::PropertyService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;

use super::property::PropertyResponse;

#[utoipa::path(
    get,
    path = "/fraudAgent/{email}",
    params(("email" = String, Path, description = "Agent email")),
    responses(
        (status = 200, description = "Every listing of the agent, deleted ones included", body = Vec<PropertyResponse>),
    ),
    tag = "moderation"
)]
pub async fn list_fraud_agent_properties(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let listings = PropertyService::new(db).list_by_agent(&email, true).await?;
    let items: Vec<PropertyResponse> = listings.into_iter().map(PropertyResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    post,
    path = "/fraudUserData",
    request_body(content = Vec<String>, description = "Ids of the listings to remove"),
    responses(
        (status = 200, description = "Counts of both deletes", body = PurgeOutcome),
        (status = 500, description = "One of the deletes failed", body = AppError),
    ),
    tag = "moderation"
)]
pub async fn purge_fraud_listings(
    Extension(db): Extension<DatabaseConnection>,
    Json(listing_ids): Json<Vec<String>>,
) -> AppResult<impl IntoResponse> {
    let outcome = ModerationService::new(db)
        .purge_listings(&listing_ids)
        .await?;
    Ok(ApiResponse::ok(outcome))
}
