use crate::error::{validation_error, AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::{EmbeddedReview, ListingStatus, PropertyModel};
use crate::response::{ApiResponse, UpdateOutcome};
use crate::services::property::{NewProperty, PropertyDetails, PropertyService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Agent details copied onto listings, offers and ads.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AgentRef {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub image: Option<String>,
    pub price: f64,
    pub agent: AgentRef,
    pub status: ListingStatus,
    pub ads_status: bool,
    pub is_deleted: bool,
    pub reviews_collection: Vec<EmbeddedReview>,
    pub created_at: String,
}

impl From<PropertyModel> for PropertyResponse {
    fn from(p: PropertyModel) -> Self {
        Self {
            id: p.id,
            title: p.title,
            location: p.location,
            image: p.image,
            price: p.price,
            agent: AgentRef {
                email: p.agent_email,
                name: p.agent_name,
                image: p.agent_image,
            },
            status: p.status,
            ads_status: p.ads_status,
            is_deleted: p.is_deleted,
            reviews_collection: p.reviews.0,
            created_at: p.created_at.to_string(),
        }
    }
}

fn to_responses(listings: Vec<PropertyModel>) -> Vec<PropertyResponse> {
    listings.into_iter().map(PropertyResponse::from).collect()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePropertyRequest {
    /// Optional caller-chosen id
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    pub image: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(nested)]
    pub agent: AgentRef,
    /// Defaults to pending
    pub status: Option<ListingStatus>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: ListingStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdsStatusRequest {
    pub ads_status: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddReviewRequest {
    #[validate(length(min = 1, max = 200))]
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub reviewer_image: Option<String>,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/requestedProperties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 200, description = "Listing created", body = PropertyResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "properties"
)]
pub async fn create_property(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreatePropertyRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let service = PropertyService::new(db);
    let listing = service
        .create(NewProperty {
            id: payload.id,
            title: payload.title,
            location: payload.location,
            image: payload.image,
            price: payload.price,
            agent_email: payload.agent.email,
            agent_name: payload.agent.name,
            agent_image: payload.agent.image,
            status: payload.status.unwrap_or_default(),
        })
        .await?;

    Ok(ApiResponse::ok(PropertyResponse::from(listing)))
}

#[utoipa::path(
    get,
    path = "/requestedProperties",
    responses(
        (status = 200, description = "Every listing in every state", body = Vec<PropertyResponse>),
    ),
    tag = "properties"
)]
pub async fn list_properties(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let listings = PropertyService::new(db).list_all().await?;
    Ok(ApiResponse::ok(to_responses(listings)))
}

#[utoipa::path(
    get,
    path = "/requestedProperty",
    responses(
        (status = 200, description = "Verified listings that are not deleted", body = Vec<PropertyResponse>),
    ),
    tag = "properties"
)]
pub async fn list_listed_properties(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let listings = PropertyService::new(db).list_listed().await?;
    Ok(ApiResponse::ok(to_responses(listings)))
}

/// Served on `/requestedProperty/{id}`, `/properties/{id}` and `/addedProperty/{id}`.
#[utoipa::path(
    get,
    path = "/requestedProperty/{id}",
    params(("id" = String, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing, soft-deleted or not", body = PropertyResponse),
        (status = 404, description = "Listing not found", body = AppError),
    ),
    tag = "properties"
)]
pub async fn get_property(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let listing = PropertyService::new(db).get_by_id(&id).await?;
    Ok(ApiResponse::ok(PropertyResponse::from(listing)))
}

#[utoipa::path(
    put,
    path = "/requestedProperty/{id}",
    params(("id" = String, Path, description = "Listing id")),
    request_body = UpdatePropertyRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "properties"
)]
pub async fn update_property(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePropertyRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let outcome = PropertyService::new(db)
        .update_details(
            &id,
            PropertyDetails {
                title: payload.title,
                location: payload.location,
                price: payload.price,
                image: payload.image,
            },
        )
        .await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    put,
    path = "/updateStatus/{id}",
    params(("id" = String, Path, description = "Listing id")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
    ),
    tag = "properties"
)]
pub async fn update_property_status(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = PropertyService::new(db)
        .set_status(&id, payload.status)
        .await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    put,
    path = "/addAdsStatus/{id}",
    params(("id" = String, Path, description = "Listing id")),
    request_body = UpdateAdsStatusRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
    ),
    tag = "properties"
)]
pub async fn update_ads_status(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAdsStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = PropertyService::new(db)
        .set_ads_status(&id, payload.ads_status)
        .await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    put,
    path = "/agentPropertyDeletedStatus/{id}",
    params(("id" = String, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
    ),
    tag = "properties"
)]
pub async fn soft_delete_property(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = PropertyService::new(db).soft_delete(&id).await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    get,
    path = "/addedProperty/agent/{email}",
    security(("jwt_token" = [])),
    params(("email" = String, Path, description = "Agent email")),
    responses(
        (status = 200, description = "Agent's listings that are not deleted", body = Vec<PropertyResponse>),
        (status = 401, description = "Missing token", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
    ),
    tag = "properties"
)]
pub async fn list_agent_properties(
    Extension(db): Extension<DatabaseConnection>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(
        "Listing properties of {} for {}",
        email,
        auth_user.email().unwrap_or("unknown")
    );
    let listings = PropertyService::new(db).list_by_agent(&email, false).await?;
    Ok(ApiResponse::ok(to_responses(listings)))
}

#[utoipa::path(
    get,
    path = "/searchProperties/{name}",
    params(("name" = String, Path, description = "Case-insensitive substring of the title")),
    responses(
        (status = 200, description = "Matching listings", body = Vec<PropertyResponse>),
    ),
    tag = "properties"
)]
pub async fn search_properties(
    Extension(db): Extension<DatabaseConnection>,
    Path(name): Path<String>,
) -> AppResult<impl IntoResponse> {
    let listings = PropertyService::new(db).search(&name).await?;
    Ok(ApiResponse::ok(to_responses(listings)))
}

#[utoipa::path(
    put,
    path = "/property-review/{id}",
    params(("id" = String, Path, description = "Listing id")),
    request_body = AddReviewRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "properties"
)]
pub async fn add_property_review(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<AddReviewRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let outcome = PropertyService::new(db)
        .append_review(
            &id,
            EmbeddedReview {
                reviewer_name: payload.reviewer_name,
                reviewer_email: payload.reviewer_email,
                reviewer_image: payload.reviewer_image,
                description: payload.description,
                rating: payload.rating,
            },
        )
        .await?;
    Ok(ApiResponse::ok(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_wire_names() {
        let req: CreatePropertyRequest = serde_json::from_value(serde_json::json!({
            "_id": "listing-1",
            "title": "Lake house",
            "location": "Austin",
            "price": 250000.0,
            "agent": { "email": "agent@estate.test", "name": "Ada" }
        }))
        .unwrap();
        assert_eq!(req.id.as_deref(), Some("listing-1"));
        assert!(req.status.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn bad_agent_email_fails_validation() {
        let req: CreatePropertyRequest = serde_json::from_value(serde_json::json!({
            "title": "Lake house",
            "location": "Austin",
            "price": 1.0,
            "agent": { "email": "not-an-email", "name": "Ada" }
        }))
        .unwrap();
        assert!(req.validate().is_err());
    }
}
