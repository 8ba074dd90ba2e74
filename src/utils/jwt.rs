use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

static JWT_CONFIG: OnceLock<crate::config::jwt::JwtConfig> = OnceLock::new();

/// Initialize JWT config from environment. Must be called once at startup.
pub fn init_jwt_config(config: crate::config::jwt::JwtConfig) -> Result<()> {
    JWT_CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("JWT config already initialized"))?;
    Ok(())
}

fn get_config() -> Result<&'static crate::config::jwt::JwtConfig> {
    JWT_CONFIG
        .get()
        .ok_or_else(|| anyhow::anyhow!("JWT config not initialized, call init_jwt_config() at startup"))
}

/// Identity claims plus the registered time claims.
///
/// The identity is whatever object the client logged in with (usually
/// `{ "email": ... }`) and is carried through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn email(&self) -> Option<&str> {
        self.identity.get("email").and_then(Value::as_str)
    }
}

/// Sign `identity` with the server secret. Caller-supplied `exp`/`iat`
/// are discarded so the lifetime is always the configured one.
pub fn issue_token(mut identity: Map<String, Value>) -> Result<String> {
    let config = get_config()?;
    identity.remove("exp");
    identity.remove("iat");

    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        identity,
        exp: now + config.token_expiry as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| anyhow::anyhow!("Failed to encode token: {}", e))
}

/// Verify signature and expiry. Every failure mode collapses into one error.
pub fn verify_token(token: &str) -> Result<Claims> {
    let config = get_config()?;

    // Identities may carry their own `aud`; only signature and expiry are checked.
    let mut validation = Validation::default();
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| anyhow::anyhow!("Failed to verify token: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Once;

    static INIT: Once = Once::new();

    fn ensure_config() {
        INIT.call_once(|| {
            let config = crate::config::jwt::JwtConfig {
                secret: "a_very_long_secret_key_that_is_at_least_32_chars".to_string(),
                token_expiry: crate::config::jwt::DEFAULT_TOKEN_EXPIRY_SECS,
            };
            let _ = init_jwt_config(config);
        });
    }

    fn identity(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn issue_verify_round_trip() {
        ensure_config();
        let token = issue_token(identity(json!({ "email": "buyer@estate.test" }))).unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.email(), Some("buyer@estate.test"));
        assert_eq!(claims.exp - claims.iat, 3 * 60 * 60);
    }

    #[test]
    fn extra_identity_claims_survive() {
        ensure_config();
        let token = issue_token(identity(json!({
            "email": "agent@estate.test",
            "role": "agent"
        })))
        .unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.identity["role"], "agent");
    }

    #[test]
    fn caller_cannot_choose_expiry() {
        ensure_config();
        let token = issue_token(identity(json!({
            "email": "sneaky@estate.test",
            "exp": 9_999_999_999u64
        })))
        .unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 3 * 60 * 60);
        assert!(!claims.identity.contains_key("exp"));
    }

    #[test]
    fn identity_with_audience_round_trips() {
        ensure_config();
        let token = issue_token(identity(json!({
            "email": "web@estate.test",
            "aud": "web"
        })))
        .unwrap();
        let claims = verify_token(&token).unwrap();
        assert_eq!(claims.email(), Some("web@estate.test"));
        assert_eq!(claims.identity["aud"], "web");
    }

    #[test]
    fn tampered_token_fails() {
        ensure_config();
        let token = issue_token(identity(json!({ "email": "a@b.test" }))).unwrap();
        let mut chars: Vec<char> = token.chars().collect();
        let mid = chars.len() / 2;
        chars[mid] = if chars[mid] == 'A' { 'B' } else { 'A' };
        let tampered: String = chars.into_iter().collect();
        assert!(verify_token(&tampered).is_err());
    }

    #[test]
    fn expired_token_fails() {
        ensure_config();
        let config = get_config().unwrap();
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            identity: identity(json!({ "email": "late@estate.test" })),
            exp: now - 3600,
            iat: now - 4 * 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();
        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn foreign_secret_fails() {
        ensure_config();
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            identity: identity(json!({ "email": "x@estate.test" })),
            exp: now + 600,
            iat: now,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"some_other_secret_that_is_long_enough_too"),
        )
        .unwrap();
        assert!(verify_token(&token).is_err());
    }

    #[test]
    fn empty_token_fails() {
        ensure_config();
        assert!(verify_token("").is_err());
    }
}
