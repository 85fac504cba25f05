#![allow(dead_code)]

use reqwest::Client;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static MIGRATIONS_RAN: AtomicBool = AtomicBool::new(false);
static UNIQUE_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub addr: String,
    pub db: DatabaseConnection,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }
}

pub async fn spawn_app() -> TestApp {
    dotenv::dotenv().ok();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .unwrap_or_else(|_| std::env::var("DATABASE_URL").expect("DATABASE_URL must be set"));

    let db = sea_orm::Database::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    // Run migrations only once globally (atomic flag keeps it thread safe)
    if !MIGRATIONS_RAN.swap(true, Ordering::SeqCst) {
        kinoteka::migration::Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
    }

    let app = axum::Router::new()
        .route("/", axum::routing::get(|| async { "ok" }))
        .merge(kinoteka::routes::create_routes())
        .layer(axum::extract::Extension(db.clone()));

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
    }
}

/// Process-unique suffix so fixtures from concurrently running tests
/// never collide on slugs or names.
pub fn unique(prefix: &str) -> String {
    let counter = UNIQUE_COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}-{}-{}", prefix, std::process::id(), counter)
}

pub async fn create_category(app: &TestApp, name: &str) -> i32 {
    let slug = unique("category");
    let resp = app
        .client
        .post(app.url("/admin/categories"))
        .json(&serde_json::json!({
            "name": name,
            "description": "A test category",
            "slug": slug,
        }))
        .send()
        .await
        .expect("Failed to create category");

    let status = resp.status();
    let body: serde_json::Value = resp.json().await.expect("Failed to parse response");
    if !body["success"].as_bool().unwrap_or(false) {
        panic!("Failed to create category: status={}, body={}", status, body);
    }
    body["data"]["id"].as_i64().expect("missing id") as i32
}

pub async fn create_genre(app: &TestApp, name: &str) -> i32 {
    let slug = unique("genre");
    let resp = app
        .client
        .post(app.url("/admin/genres"))
        .json(&serde_json::json!({
            "name": name,
            "description": "A test genre",
            "slug": slug,
        }))
        .send()
        .await
        .expect("Failed to create genre");

    let body: serde_json::Value = resp.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("missing id") as i32
}

pub async fn create_actor(app: &TestApp, name: &str) -> i32 {
    let resp = app
        .client
        .post(app.url("/admin/actors"))
        .json(&serde_json::json!({
            "name": name,
            "age": 40,
            "description": "A test actor",
            "image": format!("actors/{}.jpg", unique("img")),
        }))
        .send()
        .await
        .expect("Failed to create actor");

    let body: serde_json::Value = resp.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("missing id") as i32
}

/// Minimal movie fixture. Relations are left empty; tests that need them
/// post their own payload.
pub async fn create_movie(app: &TestApp, title: &str, draft: bool) -> i32 {
    let slug = unique("movie");
    let resp = app
        .client
        .post(app.url("/admin/movies"))
        .json(&serde_json::json!({
            "title": title,
            "tagline": "A test tagline",
            "description": "A test movie",
            "poster": "movies/poster.jpg",
            "year": 2022,
            "country": "USA",
            "world_premiere": "2022-06-01",
            "slug": slug,
            "draft": draft,
        }))
        .send()
        .await
        .expect("Failed to create movie");

    let status = resp.status();
    let body: serde_json::Value = resp.json().await.expect("Failed to parse response");
    if !body["success"].as_bool().unwrap_or(false) {
        panic!("Failed to create movie: status={}, body={}", status, body);
    }
    body["data"]["id"].as_i64().expect("missing id") as i32
}

/// Submit a review through the public endpoint; returns the HTTP status.
pub async fn submit_review(
    app: &TestApp,
    movie_id: i32,
    name: &str,
    parent_id: Option<i32>,
) -> reqwest::StatusCode {
    let mut payload = serde_json::json!({
        "email": "viewer@example.com",
        "name": name,
        "text": format!("Review from {}", name),
        "movie_id": movie_id,
    });
    if let Some(pid) = parent_id {
        payload["parent_id"] = serde_json::json!(pid);
    }

    app.client
        .post(app.url("/review"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit review")
        .status()
}

/// Look a review up by its (unique) reviewer name via the admin list.
pub async fn find_review_id(app: &TestApp, name: &str) -> i32 {
    let resp = app
        .client
        .get(app.url("/admin/reviews?per_page=100"))
        .send()
        .await
        .expect("Failed to list reviews");

    let body: serde_json::Value = resp.json().await.expect("Failed to parse response");
    body["data"]["items"]
        .as_array()
        .expect("missing items")
        .iter()
        .find(|item| item["name"] == name)
        .and_then(|item| item["id"].as_i64())
        .unwrap_or_else(|| panic!("Review by '{}' not found", name)) as i32
}
