use crate::{
    error::AppResult,
    models::{payment, resolve_id, PaymentModel},
    services::payment_gateway::CURRENCY,
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub id: Option<String>,
    pub offer_id: Option<String>,
    pub property_id: Option<String>,
    pub buyer_email: String,
    pub amount: f64,
    pub currency: Option<String>,
    pub transaction_id: String,
}

pub struct PaymentService {
    db: DatabaseConnection,
}

impl PaymentService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persist a payment the client completed against the gateway.
    pub async fn record(&self, input: NewPayment) -> AppResult<PaymentModel> {
        let currency = input
            .currency
            .map(|c| c.trim().to_ascii_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| CURRENCY.to_string());

        let record = payment::ActiveModel {
            id: Set(resolve_id(input.id)),
            offer_id: Set(input.offer_id),
            property_id: Set(input.property_id),
            buyer_email: Set(input.buyer_email),
            amount: Set(input.amount),
            currency: Set(currency),
            transaction_id: Set(input.transaction_id),
            created_at: Set(chrono::Utc::now().naive_utc()),
        }
        .insert(&self.db)
        .await?;

        tracing::info!(
            "Recorded payment {} ({} {})",
            record.transaction_id,
            record.amount,
            record.currency
        );
        Ok(record)
    }
}
