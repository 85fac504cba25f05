mod config;
mod error;
mod handlers;
mod migration;
mod models;
mod response;
mod routes;
mod services;
mod utils;

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use sea_orm_migration::MigratorTrait;
use serde_json::json;
use std::env;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        // Public routes
        crate::handlers::movie::list_movies,
        crate::handlers::movie::get_movie,
        crate::handlers::review::create_review,
        // Admin: movies
        crate::handlers::movie::admin_list_movies,
        crate::handlers::movie::admin_create_movie,
        crate::handlers::movie::admin_get_movie,
        crate::handlers::movie::admin_update_movie,
        crate::handlers::movie::admin_delete_movie,
        crate::handlers::movie::publish_movies,
        crate::handlers::movie::unpublish_movies,
        // Admin: categories
        crate::handlers::category::admin_list_categories,
        crate::handlers::category::admin_get_category,
        crate::handlers::category::admin_create_category,
        crate::handlers::category::admin_update_category,
        crate::handlers::category::admin_delete_category,
        // Admin: genres
        crate::handlers::genre::admin_list_genres,
        crate::handlers::genre::admin_get_genre,
        crate::handlers::genre::admin_create_genre,
        crate::handlers::genre::admin_update_genre,
        crate::handlers::genre::admin_delete_genre,
        // Admin: actors
        crate::handlers::actor::admin_list_actors,
        crate::handlers::actor::admin_get_actor,
        crate::handlers::actor::admin_create_actor,
        crate::handlers::actor::admin_update_actor,
        crate::handlers::actor::admin_delete_actor,
        // Admin: movie stills
        crate::handlers::movie_short::admin_list_movie_shorts,
        crate::handlers::movie_short::admin_get_movie_short,
        crate::handlers::movie_short::admin_create_movie_short,
        crate::handlers::movie_short::admin_update_movie_short,
        crate::handlers::movie_short::admin_delete_movie_short,
        // Admin: ratings
        crate::handlers::rating::admin_list_rating_stars,
        crate::handlers::rating::admin_create_rating_star,
        crate::handlers::rating::admin_delete_rating_star,
        crate::handlers::rating::admin_list_ratings,
        crate::handlers::rating::admin_create_rating,
        crate::handlers::rating::admin_delete_rating,
        // Admin: reviews
        crate::handlers::review::admin_list_reviews,
        crate::handlers::review::admin_delete_review,
    ),
    components(
        schemas(
            crate::response::ApiResponse<serde_json::Value>,
            crate::response::PaginatedResponse<serde_json::Value>,
            crate::response::PaginationQuery,
            crate::error::AppError,
            // Movies
            crate::handlers::movie::MovieListItem,
            crate::handlers::movie::MovieDetailResponse,
            crate::handlers::movie::CreateMovieRequest,
            crate::handlers::movie::UpdateMovieRequest,
            crate::handlers::movie::AdminMovieRow,
            crate::handlers::movie::AdminMovieResponse,
            crate::handlers::movie::BulkMovieIdsRequest,
            crate::handlers::movie::BulkUpdateResponse,
            // Reviews
            crate::handlers::review::CreateReviewRequest,
            crate::handlers::review::ReviewTreeNode,
            crate::handlers::review::AdminReviewRow,
            // Categories
            crate::handlers::category::CreateCategoryRequest,
            crate::handlers::category::UpdateCategoryRequest,
            crate::handlers::category::CategoryResponse,
            crate::handlers::category::CategoryRow,
            // Genres
            crate::handlers::genre::CreateGenreRequest,
            crate::handlers::genre::UpdateGenreRequest,
            crate::handlers::genre::GenreResponse,
            crate::handlers::genre::GenreRow,
            // Actors
            crate::handlers::actor::CreateActorRequest,
            crate::handlers::actor::UpdateActorRequest,
            crate::handlers::actor::ActorResponse,
            crate::handlers::actor::ActorRow,
            // Movie stills
            crate::handlers::movie_short::CreateMovieShortRequest,
            crate::handlers::movie_short::UpdateMovieShortRequest,
            crate::handlers::movie_short::MovieShortResponse,
            crate::handlers::movie_short::MovieShortRow,
            // Ratings
            crate::handlers::rating::CreateRatingStarRequest,
            crate::handlers::rating::RatingStarResponse,
            crate::handlers::rating::CreateRatingRequest,
            crate::handlers::rating::RatingResponse,
            crate::handlers::rating::RatingRow,
        )
    ),
    tags(
        (name = "movies", description = "Public movie catalog"),
        (name = "reviews", description = "Visitor review submission"),
        (name = "admin", description = "Staff console operations"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinoteka=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let media_dir = validate_config()?;

    tracing::info!("Starting Kinoteka API v{}...", env!("CARGO_PKG_VERSION"));

    let db = config::database::get_database().await?;
    tracing::info!("Database connected successfully");

    migration::Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied successfully");

    let app = create_app(&media_dir).layer(Extension(db));

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Validate all required configuration at startup (fail-fast).
fn validate_config() -> anyhow::Result<String> {
    // DATABASE_URL — checked here for early error; actual connection happens later
    if env::var("DATABASE_URL").is_err() {
        return Err(anyhow::anyhow!(
            "DATABASE_URL environment variable must be set"
        ));
    }

    // Media directory — create if needed
    let media_dir = env::var("MEDIA_DIR").unwrap_or_else(|_| "./media".to_string());
    std::fs::create_dir_all(&media_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create media directory '{}': {}", media_dir, e))?;

    Ok(media_dir)
}

fn build_cors_layer() -> CorsLayer {
    use axum::http::{header, HeaderValue, Method};

    let origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins_str == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

fn create_app(media_dir: &str) -> Router {
    Router::new()
        .route("/", get(health_check))
        .merge(routes::create_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/media", ServeDir::new(media_dir))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}

#[utoipa::path(
    get,
    path = "/",
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
        "service": "Kinoteka API",
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
