use crate::error::{validation_error, AppError, AppResult};
use crate::models::ReportModel;
use crate::response::{ApiResponse, DeleteOutcome};
use crate::services::property::PropertyService;
use crate::services::report::{NewReport, ReportService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub property_id: String,
    pub property_title: Option<String>,
    pub agent_name: Option<String>,
    pub reporter_name: String,
    pub reporter_email: String,
    pub description: String,
    pub created_at: String,
}

impl From<ReportModel> for ReportResponse {
    fn from(r: ReportModel) -> Self {
        Self {
            id: r.id,
            property_id: r.property_id,
            property_title: r.property_title,
            agent_name: r.agent_name,
            reporter_name: r.reporter_name,
            reporter_email: r.reporter_email,
            description: r.description,
            created_at: r.created_at.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    /// Reported listing
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,
    pub property_title: Option<String>,
    pub agent_name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub reporter_name: String,
    #[validate(email)]
    pub reporter_email: String,
    /// Why the listing is being reported
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
}

#[utoipa::path(
    post,
    path = "/reports",
    request_body = CreateReportRequest,
    responses(
        (status = 200, description = "Report filed", body = ReportResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "reports"
)]
pub async fn create_report(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateReportRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let report = ReportService::new(db)
        .create(NewReport {
            id: payload.id,
            property_id: payload.property_id,
            property_title: payload.property_title,
            agent_name: payload.agent_name,
            reporter_name: payload.reporter_name,
            reporter_email: payload.reporter_email,
            description: payload.description,
        })
        .await?;

    Ok(ApiResponse::ok(ReportResponse::from(report)))
}

#[utoipa::path(
    get,
    path = "/reports",
    responses(
        (status = 200, description = "All reports", body = Vec<ReportResponse>),
    ),
    tag = "reports"
)]
pub async fn list_reports(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let reports = ReportService::new(db).list_all().await?;
    let items: Vec<ReportResponse> = reports.into_iter().map(ReportResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

/// Acting on a report removes the listing itself; the report stays.
#[utoipa::path(
    delete,
    path = "/reportProperty/{id}",
    params(("id" = String, Path, description = "Reported listing id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteOutcome),
    ),
    tag = "reports"
)]
pub async fn delete_reported_property(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = PropertyService::new(db).delete(&id).await?;
    if outcome.deleted_count > 0 {
        tracing::info!("Removed reported listing {}", id);
    }
    Ok(ApiResponse::ok(outcome))
}
