use anyhow::Result;
use std::env;

/// Tokens live for three hours unless overridden.
pub const DEFAULT_TOKEN_EXPIRY_SECS: u64 = 3 * 60 * 60;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: u64,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self> {
        let secret = env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| anyhow::anyhow!("ACCESS_TOKEN_SECRET environment variable must be set"))?;

        if secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "ACCESS_TOKEN_SECRET must be at least 32 characters"
            ));
        }

        let token_expiry = env::var("ACCESS_TOKEN_EXPIRATION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS);

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}
