use crate::error::{validation_error, AppError, AppResult};
use crate::models::{UserModel, UserRole};
use crate::response::{ApiResponse, DeleteOutcome, UpdateOutcome};
use crate::services::user::{UserProfile, UserService};
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub role: UserRole,
    pub created_at: String,
}

impl From<UserModel> for UserResponse {
    fn from(u: UserModel) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            photo: u.photo,
            role: u.role,
            created_at: u.created_at.to_string(),
        }
    }
}

/// Profile sent by the client on login.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertUserRequest {
    /// Display name
    #[validate(length(max = 200))]
    pub name: Option<String>,
    /// Avatar URL
    #[validate(length(max = 2048))]
    pub photo: Option<String>,
    /// Initial role, buyer when omitted
    pub role: Option<UserRole>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    pub role: UserRole,
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User email; the path is shared with delete-by-id")),
    request_body = UpsertUserRequest,
    responses(
        (status = 200, description = "Existing or newly created user", body = UserResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "users"
)]
pub async fn upsert_user(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
    Json(payload): Json<UpsertUserRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let email = email.trim().to_string();
    if email.is_empty() || email.len() > 255 {
        return Err(AppError::Validation(
            "email must be 1 to 255 characters".to_string(),
        ));
    }

    let service = UserService::new(db);
    let user = service
        .upsert_by_email(
            &email,
            UserProfile {
                name: payload.name,
                photo: payload.photo,
                role: payload.role,
            },
        )
        .await?;

    Ok(ApiResponse::ok(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>),
    ),
    tag = "users"
)]
pub async fn list_users(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let users = UserService::new(db).list_all().await?;
    let items: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    get,
    path = "/agents",
    responses(
        (status = 200, description = "Users with the agent role", body = Vec<UserResponse>),
    ),
    tag = "users"
)]
pub async fn list_agents(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let agents = UserService::new(db).list_agents().await?;
    let items: Vec<UserResponse> = agents.into_iter().map(UserResponse::from).collect();
    Ok(ApiResponse::ok(items))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User email; the path is shared with the role update")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 404, description = "User not found", body = AppError),
    ),
    tag = "users"
)]
pub async fn get_user(
    Extension(db): Extension<DatabaseConnection>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserService::new(db).get_by_email(&email).await?;
    Ok(ApiResponse::ok(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    security(("jwt_token" = [])),
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Delete result", body = DeleteOutcome),
        (status = 401, description = "Missing token", body = AppError),
        (status = 403, description = "Invalid token", body = AppError),
    ),
    tag = "users"
)]
pub async fn delete_user(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let outcome = UserService::new(db).delete(&id).await?;
    Ok(ApiResponse::ok(outcome))
}

#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Update result", body = UpdateOutcome),
    ),
    tag = "users"
)]
pub async fn update_user_role(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateRoleRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = UserService::new(db).update_role(&id, payload.role).await?;
    Ok(ApiResponse::ok(outcome))
}
