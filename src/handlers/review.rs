use crate::error::{AppError, AppResult};
use crate::models::ReviewModel;
use crate::response::{ApiResponse, PaginatedResponse, PaginationQuery};
use crate::services::review::ReviewService;
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 5000, message = "text must be 1-5000 characters"))]
    pub text: String,
    pub movie_id: i32,
    pub parent_id: Option<i32>,
}

/// One node of the public review tree. Only the reviewer's display name
/// and the message are exposed; the email stays private.
#[derive(Debug, Serialize, Clone)]
pub struct ReviewTreeNode {
    pub name: String,
    pub text: String,
    pub children: Vec<ReviewTreeNode>,
}

impl utoipa::ToSchema for ReviewTreeNode {
    fn name() -> std::borrow::Cow<'static, str> {
        "ReviewTreeNode".into()
    }
}

impl utoipa::PartialSchema for ReviewTreeNode {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        use utoipa::openapi::schema::{ObjectBuilder, Schema, Type};
        utoipa::openapi::RefOr::T(Schema::Object(
            ObjectBuilder::new()
                .schema_type(Type::Object)
                .property("name", String::schema())
                .property("text", String::schema())
                .property(
                    "children",
                    utoipa::openapi::schema::ArrayBuilder::new()
                        .items(utoipa::openapi::Ref::from_schema_name("ReviewTreeNode"))
                        .build(),
                )
                .required("name")
                .required("text")
                .required("children")
                .build(),
        ))
    }
}

impl From<ReviewModel> for ReviewTreeNode {
    fn from(r: ReviewModel) -> Self {
        Self {
            name: r.name,
            text: r.text,
            children: Vec::new(),
        }
    }
}

/// Arrange one movie's reviews into the thread structure: top-level
/// reviews are the roots, replies hang off their parent. Input order
/// (ascending id) is preserved among siblings.
pub fn build_review_tree(reviews: Vec<ReviewModel>) -> Vec<ReviewTreeNode> {
    let mut children_map: HashMap<Option<i32>, Vec<i32>> = HashMap::new();
    for review in &reviews {
        children_map
            .entry(review.parent_id)
            .or_default()
            .push(review.id);
    }

    let mut nodes: HashMap<i32, ReviewTreeNode> = reviews
        .into_iter()
        .map(|review| (review.id, ReviewTreeNode::from(review)))
        .collect();

    fn attach_children(
        node_id: i32,
        nodes: &mut HashMap<i32, ReviewTreeNode>,
        children_map: &HashMap<Option<i32>, Vec<i32>>,
    ) -> Option<ReviewTreeNode> {
        let mut node = nodes.remove(&node_id)?;
        if let Some(child_ids) = children_map.get(&Some(node_id)) {
            for &child_id in child_ids {
                if let Some(child) = attach_children(child_id, nodes, children_map) {
                    node.children.push(child);
                }
            }
        }
        Some(node)
    }

    let root_ids = children_map.get(&None).cloned().unwrap_or_default();
    root_ids
        .into_iter()
        .filter_map(|id| attach_children(id, &mut nodes, &children_map))
        .collect()
}

#[utoipa::path(
    post,
    path = "/review",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review accepted"),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "reviews"
)]
pub async fn create_review(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = ReviewService::new(db);
    service
        .create(
            &payload.email,
            &payload.name,
            &payload.text,
            payload.movie_id,
            payload.parent_id,
        )
        .await?;

    Ok(StatusCode::CREATED)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminReviewRow {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub parent_id: Option<i32>,
    pub movie_id: i32,
}

impl From<ReviewModel> for AdminReviewRow {
    fn from(r: ReviewModel) -> Self {
        Self {
            id: r.id,
            name: r.name,
            email: r.email,
            parent_id: r.parent_id,
            movie_id: r.movie_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/reviews",
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
    ),
    responses(
        (status = 200, description = "All reviews, newest first", body = PaginatedResponse<AdminReviewRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_reviews(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<PaginationQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(20).min(100);

    let service = ReviewService::new(db);
    let (reviews, total) = service.list(page, per_page).await?;
    let items: Vec<AdminReviewRow> = reviews.into_iter().map(AdminReviewRow::from).collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        items, total, page, per_page,
    )))
}

#[utoipa::path(
    delete,
    path = "/admin/reviews/{id}",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted", body = String),
        (status = 404, description = "Review not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_review(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = ReviewService::new(db);
    service.delete(id).await?;

    Ok(ApiResponse::ok("Review deleted"))
}
