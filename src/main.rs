use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};
use estate_market::{
    config, handlers, migration, routes,
    services::payment_gateway::{SharedPaymentGateway, StripeGateway},
    utils,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use serde_json::json;
use std::env;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        // Session
        handlers::auth::issue_jwt,
        handlers::auth::logout,
        // Users
        handlers::user::upsert_user,
        handlers::user::list_users,
        handlers::user::list_agents,
        handlers::user::get_user,
        handlers::user::delete_user,
        handlers::user::update_user_role,
        // Listings
        handlers::property::create_property,
        handlers::property::list_properties,
        handlers::property::list_listed_properties,
        handlers::property::get_property,
        handlers::property::update_property,
        handlers::property::update_property_status,
        handlers::property::update_ads_status,
        handlers::property::soft_delete_property,
        handlers::property::list_agent_properties,
        handlers::property::search_properties,
        handlers::property::add_property_review,
        // Moderation
        handlers::moderation::list_fraud_agent_properties,
        handlers::moderation::purge_fraud_listings,
        // Wishlists
        handlers::wishlist::add_to_wishlist,
        handlers::wishlist::list_wishlist,
        handlers::wishlist::get_wishlist_entry,
        handlers::wishlist::delete_wishlist_entry,
        // Reviews
        handlers::review::create_review,
        handlers::review::list_reviews,
        handlers::review::list_reviews_by_reviewer,
        handlers::review::delete_review,
        // Reports
        handlers::report::create_report,
        handlers::report::list_reports,
        handlers::report::delete_reported_property,
        // Offers
        handlers::offer::create_offer,
        handlers::offer::get_offer,
        handlers::offer::list_buyer_offers,
        handlers::offer::list_agent_offers,
        handlers::offer::list_sold_offers,
        handlers::offer::update_offer_status,
        handlers::offer::complete_offer_purchase,
        // Payments
        handlers::payment::create_payment_intent,
        handlers::payment::record_payment,
        // Advertisements
        handlers::advertisement::create_advertisement,
        handlers::advertisement::list_advertisements,
        handlers::advertisement::delete_advertisement,
    ),
    components(
        schemas(
            estate_market::response::ApiResponse<serde_json::Value>,
            estate_market::response::UpdateOutcome,
            estate_market::response::DeleteOutcome,
            estate_market::error::AppError,
            estate_market::models::UserRole,
            estate_market::models::ListingStatus,
            estate_market::models::OfferStatus,
            estate_market::models::EmbeddedReview,
            estate_market::services::moderation::PurgeOutcome,
            handlers::auth::TokenResponse,
            handlers::user::UserResponse,
            handlers::user::UpsertUserRequest,
            handlers::user::UpdateRoleRequest,
            handlers::property::AgentRef,
            handlers::property::PropertyResponse,
            handlers::property::CreatePropertyRequest,
            handlers::property::UpdatePropertyRequest,
            handlers::property::UpdateStatusRequest,
            handlers::property::UpdateAdsStatusRequest,
            handlers::property::AddReviewRequest,
            handlers::wishlist::WishlistResponse,
            handlers::wishlist::AddWishlistRequest,
            handlers::review::ReviewResponse,
            handlers::review::CreateReviewRequest,
            handlers::report::ReportResponse,
            handlers::report::CreateReportRequest,
            handlers::offer::OfferResponse,
            handlers::offer::CreateOfferRequest,
            handlers::offer::UpdateOfferStatusRequest,
            handlers::offer::CompletePurchaseRequest,
            handlers::payment::PaymentIntentRequest,
            handlers::payment::PaymentIntentResponse,
            handlers::payment::PaymentResponse,
            handlers::payment::RecordPaymentRequest,
            handlers::advertisement::AdvertisementResponse,
            handlers::advertisement::CreateAdvertisementRequest,
        )
    ),
    tags(
        (name = "auth", description = "Session token operations"),
        (name = "users", description = "User operations"),
        (name = "properties", description = "Listing lifecycle operations"),
        (name = "moderation", description = "Fraud handling operations"),
        (name = "wishlists", description = "Wishlist operations"),
        (name = "reviews", description = "Review operations"),
        (name = "reports", description = "Listing report operations"),
        (name = "offers", description = "Offer operations"),
        (name = "payments", description = "Payment operations"),
        (name = "advertisements", description = "Advertisement slot operations"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_market=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration before doing anything else
    let jwt_config = validate_config()?;
    utils::jwt::init_jwt_config(jwt_config)?;

    tracing::info!("Starting Real Estate API v{}...", env!("CARGO_PKG_VERSION"));

    let db = config::database::get_database().await?;
    tracing::info!("Database connected successfully");

    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    // Payments are optional; the intent route answers 502 without a gateway
    let gateway: Option<SharedPaymentGateway> = match config::payment::PaymentConfig::from_env() {
        Some(payment_config) => {
            let gateway = StripeGateway::new(payment_config)?;
            tracing::info!("Stripe payment gateway configured");
            Some(Arc::new(gateway))
        }
        None => {
            tracing::warn!("STRIPE_SECRET_KEY not set, payment intents are disabled");
            None
        }
    };

    let mut app = create_app().layer(Extension(db.clone()));
    if let Some(gateway) = gateway {
        app = app.layer(Extension(gateway));
    }

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Validate all required configuration at startup (fail-fast).
fn validate_config() -> anyhow::Result<config::jwt::JwtConfig> {
    let jwt_config = config::jwt::JwtConfig::from_env()?;

    // Only checked here; the connection is opened later
    config::database::database_url()?;

    Ok(jwt_config)
}

fn create_app() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(routes::create_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(config::cors::build_cors_layer())
}

async fn root() -> &'static str {
    "Real Estate Community is running"
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check successful", body = serde_json::Value)
    )
)]
async fn health_check(Extension(db): Extension<DatabaseConnection>) -> impl IntoResponse {
    let db_ok = db
        .query_one(Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            "SELECT 1".to_string(),
        ))
        .await
        .is_ok();

    let status = if db_ok { "ok" } else { "degraded" };

    Json(json!({
        "status": status,
        "service": "Real Estate API",
        "version": env!("CARGO_PKG_VERSION"),
        "database": db_ok,
    }))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, gracefully shutting down...");
}
