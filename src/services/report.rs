use crate::{
    error::AppResult,
    models::{report, resolve_id, Report, ReportModel},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

#[derive(Debug, Clone)]
pub struct NewReport {
    pub id: Option<String>,
    pub property_id: String,
    pub property_title: Option<String>,
    pub agent_name: Option<String>,
    pub reporter_name: String,
    pub reporter_email: String,
    pub description: String,
}

/// Reports are append-only; acting on one removes the listing instead
/// (see `PropertyService::delete`).
pub struct ReportService {
    db: DatabaseConnection,
}

impl ReportService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, input: NewReport) -> AppResult<ReportModel> {
        let report = report::ActiveModel {
            id: Set(resolve_id(input.id)),
            property_id: Set(input.property_id),
            property_title: Set(input.property_title),
            agent_name: Set(input.agent_name),
            reporter_name: Set(input.reporter_name),
            reporter_email: Set(input.reporter_email),
            description: Set(input.description),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };

        Ok(report.insert(&self.db).await?)
    }

    pub async fn list_all(&self) -> AppResult<Vec<ReportModel>> {
        Ok(Report::find()
            .order_by_asc(report::Column::CreatedAt)
            .all(&self.db)
            .await?)
    }
}
