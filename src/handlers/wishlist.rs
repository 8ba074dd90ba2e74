use crate::error::{validation_error, AppError, AppResult};
use crate::models::WishlistModel;
use crate::response::{ApiResponse, DeleteOutcome};
use crate::services::wishlist::{NewWishlistEntry, WishlistInsert, WishlistService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::property::AgentRef;

pub const ALREADY_WISHLISTED: &str = "Is already added in wishlist";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    pub buyer_email: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent: AgentRef,
    pub created_at: String,
}

impl From<WishlistModel> for WishlistResponse {
    fn from(w: WishlistModel) -> Self {
        Self {
            id: w.id,
            property_id: w.property_id,
            buyer_email: w.buyer_email,
            title: w.title,
            location: w.location,
            image: w.image,
            price: w.price,
            agent: AgentRef {
                email: w.agent_email,
                name: w.agent_name,
                image: None,
            },
            created_at: w.created_at.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistRequest {
    /// Entry id; a repeat with the same id is refused
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,
    #[validate(email)]
    pub buyer_email: String,
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
    path = "/wishlists",
    request_body = AddWishlistRequest,
    responses(
        (status = 200, description = "Entry added, or `success: false` when already present", body = WishlistResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "wishlists"
)]
pub async fn add_to_wishlist(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<AddWishlistRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let service = WishlistService::new(db);
    let inserted = service
        .add(NewWishlistEntry {
            id: payload.id,
            property_id: payload.property_id,
            buyer_email: payload.buyer_email,
            title: payload.title,
            location: payload.location,
            image: payload.image,
            price: payload.price,
            agent_email: payload.agent.email,
            agent_name: payload.agent.name,
        })
        .await?;

    let response = match inserted {
        WishlistInsert::Added(entry) => ApiResponse::ok(WishlistResponse::from(entry)),
        WishlistInsert::AlreadyExists => ApiResponse::err(ALREADY_WISHLISTED.to_string()),
    };
    Ok(response)
}

#[utoipa::path(
    get,
    path = "/wishlists/{email}",
    params(("email" = String, Path, description = "Buyer email")),
    responses(
        (status = 200, description = "Buyer's wishlist", body = Vec<WishlistResponse>),
    ),
    tag = "wishlists"
)]
pub async fn list_wishlist(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entries = WishlistService::new(db).list_by_buyer(&email).await?;
    let items: Vec<WishlistResponse> = entries.into_iter().map(WishlistResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    get,
    path = "/wishlist/{id}",
    params(("id" = String, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Wishlist entry", body = WishlistResponse),
        (status = 404, description = "Entry not found", body = AppError),
    ),
    tag = "wishlists"
)]
pub async fn get_wishlist_entry(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let entry = WishlistService::new(db).get_by_id(&id).await?;
    Ok(ApiResponse::ok(WishlistResponse::from(entry)))
}

#[utoipa::path(
    delete,
    path = "/wishlist/{id}",
    params(("id" = String, Path, description = "Entry id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteOutcome),
    ),
    tag = "wishlists"
)]
pub async fn delete_wishlist_entry(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = WishlistService::new(db).delete(&id).await?;
    Ok(ApiResponse::ok(outcome))
}
