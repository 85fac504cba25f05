use crate::error::{AppError, AppResult};
use crate::models::{RatingModel, RatingStarModel};
use crate::response::{ApiResponse, PaginatedResponse, PaginationQuery};
use crate::services::rating::RatingService;
use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    Extension, Json,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRatingStarRequest {
    #[validate(range(min = 0, max = 10))]
    pub value: i16,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingStarResponse {
    pub id: i32,
    pub value: i16,
}

impl From<RatingStarModel> for RatingStarResponse {
    fn from(s: RatingStarModel) -> Self {
        Self {
            id: s.id,
            value: s.value,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRatingRequest {
    #[validate(length(min = 7, max = 15, message = "must be a dotted IPv4 address"))]
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub id: i32,
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

impl From<RatingModel> for RatingResponse {
    fn from(r: RatingModel) -> Self {
        Self {
            id: r.id,
            ip: r.ip,
            star_id: r.star_id,
            movie_id: r.movie_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingRow {
    pub id: i32,
    pub movie_id: i32,
    pub star_value: Option<i16>,
    pub ip: String,
}

impl From<(RatingModel, Option<RatingStarModel>)> for RatingRow {
    fn from((r, star): (RatingModel, Option<RatingStarModel>)) -> Self {
        Self {
            id: r.id,
            movie_id: r.movie_id,
            star_value: star.map(|s| s.value),
            ip: r.ip,
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/rating-stars",
    responses(
        (status = 200, description = "Star values, highest first", body = Vec<RatingStarResponse>),
    ),
    tag = "admin"
)]
pub async fn admin_list_rating_stars(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let service = RatingService::new(db);
    let stars = service.list_stars().await?;
    let response: Vec<RatingStarResponse> =
        stars.into_iter().map(RatingStarResponse::from).collect();
    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    post,
    path = "/admin/rating-stars",
    request_body = CreateRatingStarRequest,
    responses(
        (status = 200, description = "Star created", body = RatingStarResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_rating_star(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateRatingStarRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = RatingService::new(db);
    let star = service.create_star(payload.value).await?;

    Ok(ApiResponse::ok(RatingStarResponse::from(star)))
}

#[utoipa::path(
    delete,
    path = "/admin/rating-stars/{id}",
    params(("id" = i32, Path, description = "Star ID")),
    responses(
        (status = 200, description = "Star deleted along with its ratings", body = String),
        (status = 404, description = "Star not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_rating_star(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = RatingService::new(db);
    service.delete_star(id).await?;

    Ok(ApiResponse::ok("Star deleted"))
}

#[utoipa::path(
    get,
    path = "/admin/ratings",
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "Ratings, newest first", body = PaginatedResponse<RatingRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_ratings(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(20).min(100);

    let service = RatingService::new(db);
    let (ratings, total) = service.list_ratings(page, per_page).await?;
    let items: Vec<RatingRow> = ratings.into_iter().map(RatingRow::from).collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        items, total, page, per_page,
    )))
}

#[utoipa::path(
    post,
    path = "/admin/ratings",
    request_body = CreateRatingRequest,
    responses(
        (status = 200, description = "Rating created", body = RatingResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_rating(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateRatingRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = RatingService::new(db);
    let rating = service
        .create_rating(&payload.ip, payload.star_id, payload.movie_id)
        .await?;

    Ok(ApiResponse::ok(RatingResponse::from(rating)))
}

#[utoipa::path(
    delete,
    path = "/admin/ratings/{id}",
    params(("id" = i32, Path, description = "Rating ID")),
    responses(
        (status = 200, description = "Rating deleted", body = String),
        (status = 404, description = "Rating not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_rating(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = RatingService::new(db);
    service.delete_rating(id).await?;

    Ok(ApiResponse::ok("Rating deleted"))
}
