use std::env;

const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";

#[derive(Clone)]
pub struct PaymentConfig {
    pub secret_key: String,
    pub api_base: String,
}

impl PaymentConfig {
    /// Read gateway credentials from the environment.
    /// Returns None if no secret key is configured (payment intents disabled).
    pub fn from_env() -> Option<Self> {
        let secret_key = env::var("STRIPE_SECRET_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())?;
        let api_base = env::var("STRIPE_API_BASE")
            .map(|b| b.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_STRIPE_API_BASE.to_string());

        Some(Self {
            secret_key,
            api_base,
        })
    }
}
