use crate::error::{AppError, AppResult};
use crate::models::CategoryModel;
use crate::response::ApiResponse;
use crate::services::category::CategoryService;
use axum::{extract::Path, response::IntoResponse, Extension, Json};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 160))]
    pub slug: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 160))]
    pub slug: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub slug: String,
}

impl From<CategoryModel> for CategoryResponse {
    fn from(c: CategoryModel) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            slug: c.slug,
        }
    }
}

/// List-view row: id, name, slug.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryRow {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl From<CategoryModel> for CategoryRow {
    fn from(c: CategoryModel) -> Self {
        Self {
            id: c.id,
            name: c.name,
            slug: c.slug,
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_categories(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let service = CategoryService::new(db);
    let categories = service.list().await?;
    let response: Vec<CategoryRow> = categories.into_iter().map(CategoryRow::from).collect();
    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    get,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = CategoryResponse),
        (status = 404, description = "Category not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_get_category(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = CategoryService::new(db);
    let category = service.get_by_id(id).await?;
    Ok(ApiResponse::ok(CategoryResponse::from(category)))
}

#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Slug already in use", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_category(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = CategoryService::new(db);
    let category = service
        .create(&payload.name, &payload.description, &payload.slug)
        .await?;

    Ok(ApiResponse::ok(CategoryResponse::from(category)))
}

#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Category not found", body = AppError),
        (status = 409, description = "Slug already in use", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_update_category(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = CategoryService::new(db);
    let category = service
        .update(id, &payload.name, &payload.description, &payload.slug)
        .await?;

    Ok(ApiResponse::ok(CategoryResponse::from(category)))
}

#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted; movies keep their rows", body = String),
        (status = 404, description = "Category not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_category(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = CategoryService::new(db);
    service.delete(id).await?;

    Ok(ApiResponse::ok("Category deleted"))
}
