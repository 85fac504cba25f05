use crate::error::{AppError, AppResult};
use crate::models::GenreModel;
use crate::response::ApiResponse;
use crate::services::genre::GenreService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGenreRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl From<GenreModel> for GenreResponse {
    fn from(g: GenreModel) -> Self {
        Self {
            id: g.id,
            name: g.name,
            description: g.description,
            slug: g.slug,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreRow {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl From<GenreModel> for GenreRow {
    fn from(g: GenreModel) -> Self {
        Self {
            id: g.id,
            name: g.name,
            slug: g.slug,
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/genres",
    responses(
        (status = 200, description = "All genres", body = Vec<GenreRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_genres(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let service = GenreService::new(db);
    let genres = service.list().await?;
    let response: Vec<GenreRow> = genres.into_iter().map(GenreRow::from).collect();
    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    get,
    path = "/admin/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre details", body = GenreResponse),
        (status = 404, description = "Genre not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_get_genre(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = GenreService::new(db);
    let genre = service.get_by_id(id).await?;
    Ok(ApiResponse::ok(GenreResponse::from(genre)))
}

#[utoipa::path(
    post,
    path = "/admin/genres",
    request_body = CreateGenreRequest,
    responses(
        (status = 200, description = "Genre created", body = GenreResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Slug already in use", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_genre(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateGenreRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = GenreService::new(db);
    let genre = service
        .create(&payload.name, &payload.description, &payload.slug)
        .await?;

    Ok(ApiResponse::ok(GenreResponse::from(genre)))
}

#[utoipa::path(
    put,
    path = "/admin/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    request_body = UpdateGenreRequest,
    responses(
        (status = 200, description = "Genre updated", body = GenreResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Genre not found", body = AppError),
        (status = 409, description = "Slug already in use", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_update_genre(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGenreRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = GenreService::new(db);
    let genre = service
        .update(id, &payload.name, &payload.description, &payload.slug)
        .await?;

    Ok(ApiResponse::ok(GenreResponse::from(genre)))
}

#[utoipa::path(
    delete,
    path = "/admin/genres/{id}",
    params(("id" = i32, Path, description = "Genre ID")),
    responses(
        (status = 200, description = "Genre deleted", body = String),
        (status = 404, description = "Genre not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_genre(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = GenreService::new(db);
    service.delete(id).await?;

    Ok(ApiResponse::ok("Genre deleted"))
}
