use crate::{
    config::payment::PaymentConfig,
    error::{AppError, AppResult},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Every intent is charged in US dollars.
pub const CURRENCY: &str = "usd";

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

/// Creates payment intents on an external processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> AppResult<PaymentIntent>;
}

pub type SharedPaymentGateway = Arc<dyn PaymentGateway>;

/// Convert a major-unit price into minor units, truncating like the web
/// client expects (19.99 becomes 1998 because of float rounding).
pub fn to_minor_units(price: f64) -> AppResult<i64> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::Validation(
            "price must be a positive number".to_string(),
        ));
    }

    let minor = (price * 100.0).trunc();
    if minor < 1.0 || minor > i64::MAX as f64 {
        return Err(AppError::Validation("price is out of range".to_string()));
    }
    Ok(minor as i64)
}

/// Stripe's REST API, card payments only.
pub struct StripeGateway {
    client: Client,
    config: PaymentConfig,
}

impl StripeGateway {
    pub fn new(config: PaymentConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create payment HTTP client: {}", e))?;

        Ok(Self { client, config })
    }
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: Option<String>,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> AppResult<PaymentIntent> {
        let url = format!("{}/v1/payment_intents", self.config.api_base);
        let amount = amount_minor.to_string();
        let form = [
            ("amount", amount.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| AppError::Payment(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or_else(|| "no error message".to_string());
            return Err(AppError::Payment(format!("{}: {}", status, message)));
        }

        let intent = response
            .json::<PaymentIntent>()
            .await
            .map_err(|e| AppError::Payment(format!("unexpected response: {}", e)))?;

        tracing::info!(
            "Created payment intent {} for {} {}",
            intent.id,
            amount_minor,
            currency
        );
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_convert_exactly() {
        assert_eq!(to_minor_units(250.0).unwrap(), 25_000);
        assert_eq!(to_minor_units(0.5).unwrap(), 50);
    }

    #[test]
    fn fractional_cents_truncate() {
        assert_eq!(to_minor_units(10.999).unwrap(), 1099);
        assert_eq!(to_minor_units(19.99).unwrap(), 1998);
    }

    #[test]
    fn non_positive_or_non_finite_is_rejected() {
        assert!(matches!(to_minor_units(0.0), Err(AppError::Validation(_))));
        assert!(matches!(to_minor_units(-3.0), Err(AppError::Validation(_))));
        assert!(matches!(to_minor_units(f64::NAN), Err(AppError::Validation(_))));
        assert!(matches!(to_minor_units(0.004), Err(AppError::Validation(_))));
    }
}
