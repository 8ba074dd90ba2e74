use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::utils::{cookie, issue_token};
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Signed access token, valid for three hours
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/jwt",
    request_body(content = serde_json::Value, description = "Identity claims, usually `{ \"email\": ... }`"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
    ),
    tag = "auth"
)]
pub async fn issue_jwt(Json(identity): Json<Map<String, Value>>) -> AppResult<impl IntoResponse> {
    let token = issue_token(identity)?;
    Ok(ApiResponse::ok(TokenResponse { token }))
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session cookie cleared"),
    ),
    tag = "auth"
)]
pub async fn logout() -> AppResult<impl IntoResponse> {
    let mut response = ApiResponse::ok(()).into_response();
    append_set_cookie(
        &mut response,
        &cookie::build_clear_cookie(cookie::SESSION_COOKIE),
    )?;
    Ok(response)
}

fn append_set_cookie(response: &mut Response, cookie_value: &str) -> AppResult<()> {
    let value = HeaderValue::from_str(cookie_value).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to build Set-Cookie header: {}", e))
    })?;
    response.headers_mut().append(header::SET_COOKIE, value);
    Ok(())
}
