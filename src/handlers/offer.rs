use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::{OfferModel, OfferStatus};
use crate::response::{ApiResponse, UpdateOutcome};
use crate::services::offer::{NewOffer, OfferService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::property::AgentRef;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OfferResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub agent: AgentRef,
    pub buyer_email: String,
    pub buyer_name: Option<String>,
    pub offered_price: f64,
    pub status: OfferStatus,
    pub transaction_id: Option<String>,
    pub created_at: String,
}

impl From<OfferModel> for OfferResponse {
    fn from(o: OfferModel) -> Self {
        Self {
            id: o.id,
            property_id: o.property_id,
            title: o.title,
            location: o.location,
            image: o.image,
            agent: AgentRef {
                email: o.agent_email,
                name: o.agent_name,
                image: None,
            },
            buyer_email: o.buyer_email,
            buyer_name: o.buyer_name,
            offered_price: o.offered_price,
            status: o.status,
            transaction_id: o.transaction_id,
            created_at: o.created_at.to_string(),
        }
    }
}

fn to_responses(offers: Vec<OfferModel>) -> Vec<OfferResponse> {
    offers.into_iter().map(OfferResponse::from).collect()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub image: Option<String>,
    #[validate(nested)]
    pub agent: AgentRef,
    #[validate(email)]
    pub buyer_email: String,
    pub buyer_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub offered_price: f64,
    /// Defaults to pending
    pub status: Option<OfferStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOfferStatusRequest {
    pub status: OfferStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletePurchaseRequest {
    pub status: OfferStatus,
    /// Gateway transaction id of the completed payment
    pub transaction_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/addedOffers",
    security(("jwt_token" = [])),
    request_body = CreateOfferRequest,
    responses(
        (status = 200, description = "Offer created", body = OfferResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 401, description = "Missing token", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
    ),
    tag = "offers"
)]
pub async fn create_offer(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Json(payload): Json<CreateOfferRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let offer = OfferService::new(db)
        .create(NewOffer {
            id: payload.id,
            property_id: payload.property_id,
            title: payload.title,
            location: payload.location,
            image: payload.image,
            agent_email: payload.agent.email,
            agent_name: payload.agent.name,
            buyer_email: payload.buyer_email,
            buyer_name: payload.buyer_name,
            offered_price: payload.offered_price,
            status: payload.status.unwrap_or_default(),
        })
        .await?;

    tracing::info!(
        "Offer {} on listing {} placed by {}",
        offer.id,
        offer.property_id,
        auth_user.email().unwrap_or("unknown")
    );
    Ok(ApiResponse::ok(OfferResponse::from(offer)))
}

#[utoipa::path(
    get,
    path = "/addedOfferPayment/{id}",
    params(("id" = String, Path, description = "Offer id")),
    responses(
        (status = 200, description = "Offer", body = OfferResponse),
        (status = 404, description = "Offer not found", body = AppError),
    ),
    tag = "offers"
)]
pub async fn get_offer(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let offer = OfferService::new(db).get_by_id(&id).await?;
    Ok(ApiResponse::ok(OfferResponse::from(offer)))
}

#[utoipa::path(
    get,
    path = "/addedOffer/{email}",
    security(("jwt_token" = [])),
    params(("email" = String, Path, description = "Buyer email")),
    responses(
        (status = 200, description = "Offers placed by the buyer", body = Vec<OfferResponse>),
        (status = 401, description = "Missing token", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
    ),
    tag = "offers"
)]
pub async fn list_buyer_offers(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let offers = OfferService::new(db).list_by_buyer(&email).await?;
    Ok(ApiResponse::ok(to_responses(offers)))
}

#[utoipa::path(
    get,
    path = "/requestOffer/{id}",
    security(("jwt_token" = [])),
    params(("id" = String, Path, description = "Agent email; the path is shared with the status update")),
    responses(
        (status = 200, description = "Offers on the agent's listings", body = Vec<OfferResponse>),
        (status = 401, description = "Missing token", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
    ),
    tag = "offers"
)]
pub async fn list_agent_offers(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let offers = OfferService::new(db).list_by_agent(&email).await?;
    Ok(ApiResponse::ok(to_responses(offers)))
}

#[utoipa::path(
    get,
    path = "/soldProperties/{email}",
    security(("jwt_token" = [])),
    params(("email" = String, Path, description = "Agent email")),
    responses(
        (status = 200, description = "The agent's bought offers", body = Vec<OfferResponse>),
        (status = 401, description = "Missing token", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
    ),
    tag = "offers"
)]
pub async fn list_sold_offers(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let offers = OfferService::new(db).list_sold_by_agent(&email).await?;
    Ok(ApiResponse::ok(to_responses(offers)))
}

#[utoipa::path(
    put,
    path = "/requestOffer/{id}",
    params(("id" = String, Path, description = "Offer id")),
    request_body = UpdateOfferStatusRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
    ),
    tag = "offers"
)]
pub async fn update_offer_status(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOfferStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = OfferService::new(db).set_status(&id, payload.status).await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    put,
    path = "/offerDataUpdate/{id}",
    params(("id" = String, Path, description = "Offer id")),
    request_body = CompletePurchaseRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
    ),
    tag = "offers"
)]
pub async fn complete_offer_purchase(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<CompletePurchaseRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = OfferService::new(db)
        .record_purchase(&id, payload.status, payload.transaction_id)
        .await?;
    Ok(ApiResponse::ok(outcome))
}
