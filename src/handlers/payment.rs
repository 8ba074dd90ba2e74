use crate::error::{validation_error, AppError, AppResult};
use crate::models::PaymentModel;
use crate::response::ApiResponse;
use crate::services::payment::{NewPayment, PaymentService};
use crate::services::payment_gateway::{to_minor_units, SharedPaymentGateway, CURRENCY};
use axum::{response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentIntentRequest {
    /// Amount in dollars
    pub price: f64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub offer_id: Option<String>,
    pub property_id: Option<String>,
    pub buyer_email: String,
    pub amount: f64,
    pub currency: String,
    pub transaction_id: String,
    pub created_at: String,
}

impl From<PaymentModel> for PaymentResponse {
    fn from(p: PaymentModel) -> Self {
        Self {
            id: p.id,
            offer_id: p.offer_id,
            property_id: p.property_id,
            buyer_email: p.buyer_email,
            amount: p.amount,
            currency: p.currency,
            transaction_id: p.transaction_id,
            created_at: p.created_at.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentRequest {
    #[serde(rename = "_id")]
    #[validate(length(max = 64))]
    pub id: Option<String>,
    #[validate(length(max = 64))]
    pub offer_id: Option<String>,
    #[validate(length(max = 64))]
    pub property_id: Option<String>,
    #[serde(alias = "email")]
    #[validate(email)]
    pub buyer_email: String,
    #[serde(alias = "price")]
    #[validate(range(min = 0.0))]
    pub amount: f64,
    /// Defaults to usd
    #[validate(length(min = 3, max = 3))]
    pub currency: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub transaction_id: String,
}

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentRequest,
    responses(
        (status = 200, description = "Intent created", body = PaymentIntentResponse),
        (status = 400, description = "Price is not a positive amount", body = AppError),
        (status = 502, description = "Gateway failed or is not configured", body = AppError),
    ),
    tag = "payments"
)]
pub async fn create_payment_intent(
    gateway: Option<Extension<SharedPaymentGateway>>,
    Json(payload): Json<PaymentIntentRequest>,
) -> AppResult<impl IntoResponse> {
    let amount = to_minor_units(payload.price)?;

    let Some(Extension(gateway)) = gateway else {
        return Err(AppError::Payment(
            "payment gateway is not configured".to_string(),
        ));
    };

    let intent = gateway.create_intent(amount, CURRENCY).await?;
    Ok(ApiResponse::ok(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}

#[utoipa::path(
    post,
    path = "/payments",
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = PaymentResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "payments"
)]
pub async fn record_payment(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<RecordPaymentRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate().map_err(validation_error)?;

    let payment = PaymentService::new(db)
        .record(NewPayment {
            id: payload.id,
            offer_id: payload.offer_id,
            property_id: payload.property_id,
            buyer_email: payload.buyer_email,
            amount: payload.amount,
            currency: payload.currency,
            transaction_id: payload.transaction_id,
        })
        .await?;

    Ok(ApiResponse::ok(PaymentResponse::from(payment)))
}
