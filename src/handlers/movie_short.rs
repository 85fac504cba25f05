use crate::error::{AppError, AppResult};
use crate::models::MovieShortModel;
use crate::response::ApiResponse;
use crate::services::movie_short::MovieShortService;
use crate::utils::media_url;
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
pub struct CreateMovieShortRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieShortRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieShortResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub movie_id: i32,
}

impl From<MovieShortModel> for MovieShortResponse {
    fn from(s: MovieShortModel) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            image: s.image,
            movie_id: s.movie_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieShortRow {
    pub id: i32,
    pub title: String,
    pub movie_id: i32,
    pub image_thumb: String,
}

impl From<MovieShortModel> for MovieShortRow {
    fn from(s: MovieShortModel) -> Self {
        Self {
            id: s.id,
            title: s.title,
            movie_id: s.movie_id,
            image_thumb: media_url(&s.image),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieShortListQuery {
    pub movie_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/admin/movie-shorts",
    params(("movie_id" = Option<i32>, Query, description = "Restrict to one movie")),
    responses(
        (status = 200, description = "Movie stills", body = Vec<MovieShortRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_movie_shorts(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<MovieShortListQuery>,
) -> AppResult<impl IntoResponse> {
    let service = MovieShortService::new(db);
    let shorts = service.list(params.movie_id).await?;
    let response: Vec<MovieShortRow> = shorts.into_iter().map(MovieShortRow::from).collect();
    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    get,
    path = "/admin/movie-shorts/{id}",
    params(("id" = i32, Path, description = "Still ID")),
    responses(
        (status = 200, description = "Still details", body = MovieShortResponse),
        (status = 404, description = "Still not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_get_movie_short(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = MovieShortService::new(db);
    let short = service.get_by_id(id).await?;
    Ok(ApiResponse::ok(MovieShortResponse::from(short)))
}

#[utoipa::path(
    post,
    path = "/admin/movie-shorts",
    request_body = CreateMovieShortRequest,
    responses(
        (status = 200, description = "Still created", body = MovieShortResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_movie_short(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateMovieShortRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = MovieShortService::new(db);
    let short = service
        .create(
            &payload.title,
            &payload.description,
            &payload.image,
            payload.movie_id,
        )
        .await?;

    Ok(ApiResponse::ok(MovieShortResponse::from(short)))
}

#[utoipa::path(
    put,
    path = "/admin/movie-shorts/{id}",
    params(("id" = i32, Path, description = "Still ID")),
    request_body = UpdateMovieShortRequest,
    responses(
        (status = 200, description = "Still updated", body = MovieShortResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Still not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_update_movie_short(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMovieShortRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = MovieShortService::new(db);
    let short = service
        .update(
            id,
            &payload.title,
            &payload.description,
            &payload.image,
            payload.movie_id,
        )
        .await?;

    Ok(ApiResponse::ok(MovieShortResponse::from(short)))
}

#[utoipa::path(
    delete,
    path = "/admin/movie-shorts/{id}",
    params(("id" = i32, Path, description = "Still ID")),
    responses(
        (status = 200, description = "Still deleted", body = String),
        (status = 404, description = "Still not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_movie_short(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = MovieShortService::new(db);
    service.delete(id).await?;

    Ok(ApiResponse::ok("Still deleted"))
}
