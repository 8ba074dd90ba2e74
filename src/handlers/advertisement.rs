use crate::error::{validation_error, AppError, AppResult};
use crate::models::{advertisement::MAX_SLOTS, AdvertisementModel};
use crate::response::{ApiResponse, DeleteOutcome};
use crate::services::advertisement::{AdvertisementInsert, AdvertisementService, NewAdvertisement};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::property::AgentRef;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent: AgentRef,
    pub created_at: String,
}

impl From<AdvertisementModel> for AdvertisementResponse {
    fn from(a: AdvertisementModel) -> Self {
        Self {
            id: a.id,
            property_id: a.property_id,
            title: a.title,
            location: a.location,
            image: a.image,
            price: a.price,
            agent: AgentRef {
                email: a.agent_email,
                name: a.agent_name,
                image: None,
            },
            created_at: a.created_at.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdvertisementRequest {
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    /// Promoted listing
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub image: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(nested)]
    pub agent: AgentRef,
}

#[utoipa::path(
    post,
    path = "/advertisement",
    request_body = CreateAdvertisementRequest,
    responses(
        (status = 200, description = "Slot taken, or `success: false` when all six are in use", body = AdvertisementResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "advertisements"
)]
pub async fn create_advertisement(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateAdvertisementRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let inserted = AdvertisementService::new(db)
        .add(NewAdvertisement {
            id: payload.id,
            property_id: payload.property_id,
            title: payload.title,
            location: payload.location,
            image: payload.image,
            price: payload.price,
            agent_email: payload.agent.email,
            agent_name: payload.agent.name,
        })
        .await?;

    let response = match inserted {
        AdvertisementInsert::Added(ad) => {
            ApiResponse::with_message(AdvertisementResponse::from(ad), "success".to_string())
        }
        AdvertisementInsert::SlotsFull => ApiResponse::err(format!(
            "All {} advertisement slots are in use",
            MAX_SLOTS
        )),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/advertisementProperties",
    responses(
        (status = 200, description = "Current advertisement slots", body = Vec<AdvertisementResponse>),
    ),
    tag = "advertisements"
)]
pub async fn list_advertisements(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let ads = AdvertisementService::new(db).list_all().await?;
    let items: Vec<AdvertisementResponse> =
        ads.into_iter().map(AdvertisementResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    delete,
    path = "/removeAds/{id}",
    params(("id" = String, Path, description = "Advertisement id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteOutcome),
    ),
    tag = "advertisements"
)]
pub async fn delete_advertisement(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = AdvertisementService::new(db).delete(&id).await?;
    Ok(ApiResponse::ok(outcome))
}
