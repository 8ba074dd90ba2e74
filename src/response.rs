use axum::{response::IntoResponse, Json};
use sea_orm::{DeleteResult, UpdateResult};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message),
        }
    }

    /// A well-formed request whose outcome is a refusal (HTTP 200, `success: false`).
    pub fn err(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}

/// Outcome of an update on a single document.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

impl From<UpdateResult> for UpdateOutcome {
    fn from(r: UpdateResult) -> Self {
        Self {
            matched_count: r.rows_affected,
            modified_count: r.rows_affected,
        }
    }
}

impl UpdateOutcome {
    pub fn from_rows(rows_affected: u64) -> Self {
        Self {
            matched_count: rows_affected,
            modified_count: rows_affected,
        }
    }
}

/// Outcome of a delete.
#[derive(Debug, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl From<DeleteResult> for DeleteOutcome {
    fn from(r: DeleteResult) -> Self {
        Self {
            deleted_count: r.rows_affected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_response_carries_message_only() {
        let resp = ApiResponse::<()>::err("full".to_string());
        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("full"));
    }

    #[test]
    fn write_outcomes_serialize_camel_case() {
        let update = serde_json::to_value(UpdateOutcome::from_rows(1)).unwrap();
        assert_eq!(update["matchedCount"], 1);
        assert_eq!(update["modifiedCount"], 1);

        let delete = serde_json::to_value(DeleteOutcome { deleted_count: 2 }).unwrap();
        assert_eq!(delete["deletedCount"], 2);
    }
}
