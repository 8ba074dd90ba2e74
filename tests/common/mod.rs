#![allow(dead_code)]

use async_trait::async_trait;
use estate_market::error::AppResult;
use estate_market::services::payment_gateway::{
    PaymentGateway, PaymentIntent, SharedPaymentGateway,
};
use reqwest::Client;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex as StdMutex, Once,
};
use tokio::sync::{Mutex, MutexGuard};

static INIT: Once = Once::new();
static MIGRATIONS_RAN: AtomicBool = AtomicBool::new(false);
static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Every test truncates the same tables, so tests in a binary take turns.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

pub const TEST_SECRET: &str = "integration_test_secret_that_is_at_least_32_characters_long";

pub fn init_env() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
        std::env::set_var("ACCESS_TOKEN_SECRET", TEST_SECRET);
        let config = estate_market::config::jwt::JwtConfig::from_env().unwrap();
        let _ = estate_market::utils::jwt::init_jwt_config(config);
    });
}

/// Payment gateway double that remembers the amounts it was asked for.
#[derive(Default)]
pub struct StubGateway {
    pub requests: StdMutex<Vec<(i64, String)>>,
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_intent(&self, amount_minor: i64, currency: &str) -> AppResult<PaymentIntent> {
        self.requests
            .lock()
            .unwrap()
            .push((amount_minor, currency.to_string()));
        Ok(PaymentIntent {
            id: format!("pi_test_{}", amount_minor),
            client_secret: format!("pi_test_{}_secret_stub", amount_minor),
        })
    }
}

pub struct TestApp {
    pub addr: String,
    pub db: DatabaseConnection,
    pub client: Client,
    pub gateway: Arc<StubGateway>,
    _guard: MutexGuard<'static, ()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_gateway(true).await
}

pub async fn spawn_app_with_gateway(with_gateway: bool) -> TestApp {
    init_env();
    let guard = DB_LOCK.lock().await;

    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"));

    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    if !MIGRATIONS_RAN.swap(true, Ordering::SeqCst) {
        estate_market::migration::Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
    }

    cleanup_tables(&db).await;

    let gateway = Arc::new(StubGateway::default());

    let mut app = axum::Router::new()
        .route("/", axum::routing::get(|| async { "ok" }))
        .merge(estate_market::routes::create_routes())
        .layer(axum::extract::Extension(db.clone()));
    if with_gateway {
        let shared: SharedPaymentGateway = gateway.clone();
        app = app.layer(axum::extract::Extension(shared));
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        addr: format!("http://{}", addr),
        db,
        client: Client::new(),
        gateway,
        _guard: guard,
    }
}

async fn cleanup_tables(db: &DatabaseConnection) {
    let tables = [
        "payments",
        "advertisements",
        "wishlists",
        "reports",
        "reviews",
        "offers",
        "properties",
        "users",
    ];

    for table in tables {
        let sql = format!("TRUNCATE TABLE {} CASCADE", table);
        let _ = db
            .execute(Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                sql,
            ))
            .await;
    }
}

pub fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Sign a token for `email` the same way `POST /jwt` does.
pub fn token_for(email: &str) -> String {
    init_env();
    let identity = json!({ "email": email });
    estate_market::utils::issue_token(identity.as_object().cloned().unwrap()).unwrap()
}

/// Create a listing through the API and return its id.
pub async fn create_listing(app: &TestApp, title: &str, agent_email: &str, status: &str) -> String {
    let resp = app
        .client
        .post(app.url("/requestedProperties"))
        .json(&json!({
            "title": title,
            "location": "Dhaka",
            "image": "https://img.test/house.jpg",
            "price": 120000.0,
            "agent": { "email": agent_email, "name": "Agent Smith" },
            "status": status
        }))
        .send()
        .await
        .expect("Failed to create listing");

    let status = resp.status();
    let body: Value = resp.json().await.expect("Failed to parse response");
    if !body["success"].as_bool().unwrap_or(false) {
        panic!("Failed to create listing: status={}, body={}", status, body);
    }

    body["data"]["_id"]
        .as_str()
        .expect("Response missing _id field")
        .to_string()
}

pub fn ad_payload(property_id: &str) -> Value {
    json!({
        "propertyId": property_id,
        "title": format!("Ad for {}", property_id),
        "location": "Chattogram",
        "price": 99000.0,
        "agent": { "email": "agent@estate.test", "name": "Agent Smith" }
    })
}
