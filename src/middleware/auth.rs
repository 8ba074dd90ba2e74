use crate::{error::AppError, utils::jwt::verify_token};
use axum::{
    extract::{FromRequestParts, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde_json::{Map, Value};

/// Identity decoded from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub identity: Map<String, Value>,
}

impl AuthUser {
    pub fn email(&self) -> Option<&str> {
        self.identity.get("email").and_then(Value::as_str)
    }
}

/// Bearer-token gate for individual routes.
///
/// A missing token is 401, a token that fails verification for any reason
/// is 403. On success the decoded identity is stored in the request
/// extensions for the handler.
pub async fn auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&headers).ok_or(AppError::Unauthorized)?;

    let claims = verify_token(&token).map_err(|e| {
        tracing::debug!("Rejected bearer token: {}", e);
        AppError::Forbidden
    })?;

    request.extensions_mut().insert(AuthUser {
        identity: claims.identity,
    });

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;

    let (scheme, token) = auth_header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extractor for AuthUser from request extensions
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_token_is_extracted() {
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer abc.def.ghi")).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn scheme_is_case_insensitive() {
        for value in ["bearer abc.def.ghi", "BEARER abc.def.ghi"] {
            assert_eq!(
                extract_bearer_token(&headers_with(value)).as_deref(),
                Some("abc.def.ghi"),
                "{}",
                value
            );
        }
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert!(extract_bearer_token(&HeaderMap::new()).is_none());
        assert!(extract_bearer_token(&headers_with("Bearer ")).is_none());
        assert!(extract_bearer_token(&headers_with("Basic dXNlcjpwYXNz")).is_none());
    }
}
