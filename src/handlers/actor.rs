use crate::error::{AppError, AppResult};
use crate::models::ActorModel;
use crate::response::{ApiResponse, PaginatedResponse, PaginationQuery};
use crate::services::actor::ActorService;
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
pub struct CreateActorRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 150))]
    #[serde(default)]
    pub age: i16,
    pub description: String,
    /// Path under the media root, e.g. `actors/keanu.jpg`.
    pub image: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateActorRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i16,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorResponse {
    pub id: i32,
    pub name: String,
    pub age: i16,
    pub description: String,
    pub image: String,
}

impl From<ActorModel> for ActorResponse {
    fn from(a: ActorModel) -> Self {
        Self {
            id: a.id,
            name: a.name,
            age: a.age,
            description: a.description,
            image: a.image,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorRow {
    pub id: i32,
    pub name: String,
    pub age: i16,
    pub image_thumb: String,
}

impl From<ActorModel> for ActorRow {
    fn from(a: ActorModel) -> Self {
        Self {
            id: a.id,
            name: a.name,
            age: a.age,
            image_thumb: media_url(&a.image),
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/actors",
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "Actors and directors", body = PaginatedResponse<ActorRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_actors(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(20).min(100);

    let service = ActorService::new(db);
    let (actors, total) = service.list(page, per_page).await?;
    let items: Vec<ActorRow> = actors.into_iter().map(ActorRow::from).collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        items, total, page, per_page,
    )))
}

#[utoipa::path(
    get,
    path = "/admin/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    responses(
        (status = 200, description = "Actor details", body = ActorResponse),
        (status = 404, description = "Actor not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_get_actor(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = ActorService::new(db);
    let actor = service.get_by_id(id).await?;
    Ok(ApiResponse::ok(ActorResponse::from(actor)))
}

#[utoipa::path(
    post,
    path = "/admin/actors",
    request_body = CreateActorRequest,
    responses(
        (status = 200, description = "Actor created", body = ActorResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_actor(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateActorRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = ActorService::new(db);
    let actor = service
        .create(
            &payload.name,
            payload.age,
            &payload.description,
            &payload.image,
        )
        .await?;

    Ok(ApiResponse::ok(ActorResponse::from(actor)))
}

#[utoipa::path(
    put,
    path = "/admin/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    request_body = UpdateActorRequest,
    responses(
        (status = 200, description = "Actor updated", body = ActorResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Actor not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_update_actor(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateActorRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = ActorService::new(db);
    let actor = service
        .update(
            id,
            &payload.name,
            payload.age,
            &payload.description,
            &payload.image,
        )
        .await?;

    Ok(ApiResponse::ok(ActorResponse::from(actor)))
}

#[utoipa::path(
    delete,
    path = "/admin/actors/{id}",
    params(("id" = i32, Path, description = "Actor ID")),
    responses(
        (status = 200, description = "Actor deleted", body = String),
        (status = 404, description = "Actor not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_actor(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = ActorService::new(db);
    service.delete(id).await?;

    Ok(ApiResponse::ok("Actor deleted"))
}
