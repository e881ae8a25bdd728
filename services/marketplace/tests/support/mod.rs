#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use common::database::{DatabaseConfig, init_pool};
use marketplace::{
    AppState,
    config::AppConfig,
    create_app,
    jwt::{JwtConfig, JwtService},
    schema,
};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const PASSWORD: &str = "sunny-days-42";

/// Router plus a handle on its in-memory database
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Set up a fresh application on a private in-memory database
pub async fn spawn_app() -> TestApp {
    spawn_app_with_static_dir(None).await
}

/// Same as `spawn_app`, optionally serving a frontend directory
pub async fn spawn_app_with_static_dir(static_dir: Option<String>) -> TestApp {
    let pool = init_pool(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    schema::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    let jwt_service = JwtService::new(JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    });

    let config = AppConfig {
        bind_address: "127.0.0.1:0".to_string(),
        secret_key: TEST_SECRET.to_string(),
        access_token_expire_minutes: 60,
        static_dir,
    };

    TestApp {
        router: create_app(AppState::new(pool.clone(), jwt_service), &config),
        pool,
    }
}

impl TestApp {
    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed to respond");

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(json_request(Method::GET, uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::POST, uri, token, Some(body)))
            .await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::PUT, uri, token, Some(body)))
            .await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(json_request(Method::PATCH, uri, token, Some(body)))
            .await
    }

    /// Register a user and return the created record
    pub async fn register(&self, email: &str, role: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/v1/auth/register",
                None,
                json!({
                    "email": email,
                    "full_name": format!("{} user", role),
                    "role": role,
                    "password": PASSWORD,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        body
    }

    /// Log in with an urlencoded form, returning status and body
    pub async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        let form = serde_urlencoded::to_string([("username", email), ("password", password)])
            .expect("Failed to encode login form");
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap();
        self.send(request).await
    }

    /// Register and log in, returning (user id, token)
    pub async fn user_with_token(&self, email: &str, role: &str) -> (i64, String) {
        let user = self.register(email, role).await;
        let (status, body) = self.login(email, PASSWORD).await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        (
            user["id"].as_i64().unwrap(),
            body["access_token"].as_str().unwrap().to_string(),
        )
    }

    /// Create an asset as `token`, asserting success
    pub async fn create_asset(&self, token: &str, asset_type: &str, location: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/v1/assets",
                Some(token),
                json!({
                    "asset_type": asset_type,
                    "capacity_kw": 100.0,
                    "location": location,
                    "price_per_unit": 0.15,
                    "description": "Test installation",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create asset failed: {}", body);
        body
    }
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
