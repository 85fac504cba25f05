use crate::error::{AppError, AppResult};
use crate::models::{CategoryModel, MovieModel};
use crate::response::{ApiResponse, PaginatedResponse};
use crate::services::movie::{bulk_update_message, MovieInput, MovieService};
use crate::services::review::ReviewService;
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

use super::review::{build_review_tree, ReviewTreeNode};

/// Public list projection: just enough for a catalog card.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListItem {
    pub title: String,
    pub tagline: String,
}

impl From<MovieModel> for MovieListItem {
    fn from(m: MovieModel) -> Self {
        Self {
            title: m.title,
            tagline: m.tagline,
        }
    }
}

/// Public detail projection. Relations are flattened to display names
/// and the draft flag is never exposed.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDetailResponse {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: String,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub slug: String,
    pub category: Option<String>,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
    pub genres: Vec<String>,
    pub reviews: Vec<ReviewTreeNode>,
}

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All published movies", body = Vec<MovieListItem>),
    ),
    tag = "movies"
)]
pub async fn list_movies(
    Extension(db): Extension<DatabaseConnection>,
) -> AppResult<impl IntoResponse> {
    let service = MovieService::new(db);
    let movies = service.list_published().await?;
    let response: Vec<MovieListItem> = movies.into_iter().map(MovieListItem::from).collect();
    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie detail with review threads", body = MovieDetailResponse),
        (status = 404, description = "Movie not found", body = AppError),
    ),
    tag = "movies"
)]
pub async fn get_movie(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = MovieService::new(db.clone());
    let detail = service.get_detail(id).await?;

    let review_service = ReviewService::new(db);
    let reviews = review_service.list_by_movie(id).await?;
    let tree = build_review_tree(reviews);

    let m = detail.movie;
    Ok(ApiResponse::ok(MovieDetailResponse {
        id: m.id,
        title: m.title,
        tagline: m.tagline,
        description: m.description,
        poster: m.poster,
        year: m.year,
        country: m.country,
        world_premiere: m.world_premiere.to_string(),
        budget: m.budget,
        fees_in_usa: m.fees_in_usa,
        fees_in_world: m.fees_in_world,
        slug: m.slug,
        category: detail.category,
        directors: detail.directors,
        actors: detail.actors,
        genres: detail.genres,
        reviews: tree,
    }))
}

// ---------------------------------------------------------------------------
// Admin surface
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    pub world_premiere: chrono::NaiveDate,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub fees_in_usa: i64,
    #[serde(default)]
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    /// New movies start as drafts unless explicitly published.
    pub draft: Option<bool>,
    #[serde(default)]
    pub actor_ids: Vec<i32>,
    #[serde(default)]
    pub director_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    pub world_premiere: chrono::NaiveDate,
    #[serde(default)]
    pub budget: i64,
    #[serde(default)]
    pub fees_in_usa: i64,
    #[serde(default)]
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub slug: String,
    pub draft: bool,
    #[serde(default)]
    pub actor_ids: Vec<i32>,
    #[serde(default)]
    pub director_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

impl From<CreateMovieRequest> for MovieInput {
    fn from(r: CreateMovieRequest) -> Self {
        MovieInput {
            title: r.title,
            tagline: r.tagline,
            description: r.description,
            poster: r.poster,
            year: r.year,
            country: r.country,
            world_premiere: r.world_premiere,
            budget: r.budget,
            fees_in_usa: r.fees_in_usa,
            fees_in_world: r.fees_in_world,
            category_id: r.category_id,
            slug: r.slug,
            draft: r.draft.unwrap_or(true),
            actor_ids: r.actor_ids,
            director_ids: r.director_ids,
            genre_ids: r.genre_ids,
        }
    }
}

impl From<UpdateMovieRequest> for MovieInput {
    fn from(r: UpdateMovieRequest) -> Self {
        MovieInput {
            title: r.title,
            tagline: r.tagline,
            description: r.description,
            poster: r.poster,
            year: r.year,
            country: r.country,
            world_premiere: r.world_premiere,
            budget: r.budget,
            fees_in_usa: r.fees_in_usa,
            fees_in_world: r.fees_in_world,
            category_id: r.category_id,
            slug: r.slug,
            draft: r.draft,
            actor_ids: r.actor_ids,
            director_ids: r.director_ids,
            genre_ids: r.genre_ids,
        }
    }
}

/// List-view row for the movie console: curated columns plus a poster
/// thumbnail URL.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminMovieRow {
    pub id: i32,
    pub title: String,
    pub category: Option<String>,
    pub slug: String,
    pub draft: bool,
    pub poster_thumb: String,
}

impl From<(MovieModel, Option<CategoryModel>)> for AdminMovieRow {
    fn from((m, c): (MovieModel, Option<CategoryModel>)) -> Self {
        Self {
            id: m.id,
            title: m.title,
            category: c.map(|c| c.name),
            slug: m.slug,
            draft: m.draft,
            poster_thumb: media_url(&m.poster),
        }
    }
}

/// Edit-form shape: raw scalar fields plus related ids.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminMovieResponse {
    pub id: i32,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: String,
    pub budget: i64,
    pub fees_in_usa: i64,
    pub fees_in_world: i64,
    pub category_id: Option<i32>,
    pub slug: String,
    pub draft: bool,
    pub actor_ids: Vec<i32>,
    pub director_ids: Vec<i32>,
    pub genre_ids: Vec<i32>,
}

impl AdminMovieResponse {
    fn new(m: MovieModel, actor_ids: Vec<i32>, director_ids: Vec<i32>, genre_ids: Vec<i32>) -> Self {
        Self {
            id: m.id,
            title: m.title,
            tagline: m.tagline,
            description: m.description,
            poster: m.poster,
            year: m.year,
            country: m.country,
            world_premiere: m.world_premiere.to_string(),
            budget: m.budget,
            fees_in_usa: m.fees_in_usa,
            fees_in_world: m.fees_in_world,
            category_id: m.category_id,
            slug: m.slug,
            draft: m.draft,
            actor_ids,
            director_ids,
            genre_ids,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminMovieListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    /// Matches against title and category name.
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub year: Option<i16>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkMovieIdsRequest {
    pub ids: Vec<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BulkUpdateResponse {
    pub updated: u64,
}

async fn admin_movie_response(
    service: &MovieService,
    movie: MovieModel,
) -> AppResult<AdminMovieResponse> {
    let (actor_ids, director_ids, genre_ids) = service.link_ids(movie.id).await?;
    Ok(AdminMovieResponse::new(
        movie,
        actor_ids,
        director_ids,
        genre_ids,
    ))
}

#[utoipa::path(
    get,
    path = "/admin/movies",
    params(
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page"),
        ("search" = Option<String>, Query, description = "Match title or category name"),
        ("category_id" = Option<i32>, Query, description = "Restrict to a category"),
        ("year" = Option<i16>, Query, description = "Restrict to a release year"),
    ),
    responses(
        (status = 200, description = "Movie console rows", body = PaginatedResponse<AdminMovieRow>),
    ),
    tag = "admin"
)]
pub async fn admin_list_movies(
    Extension(db): Extension<DatabaseConnection>,
    Query(params): Query<AdminMovieListQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = params.per_page.unwrap_or(20).min(100);

    let service = MovieService::new(db);
    let (movies, total) = service
        .list_admin(
            page,
            per_page,
            params.search.as_deref(),
            params.category_id,
            params.year,
        )
        .await?;
    let items: Vec<AdminMovieRow> = movies.into_iter().map(AdminMovieRow::from).collect();

    Ok(ApiResponse::ok(PaginatedResponse::new(
        items, total, page, per_page,
    )))
}

#[utoipa::path(
    post,
    path = "/admin/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie created", body = AdminMovieResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Slug already in use", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_create_movie(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<CreateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = MovieService::new(db);
    let movie = service.create(MovieInput::from(payload)).await?;
    let response = admin_movie_response(&service, movie).await?;

    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    get,
    path = "/admin/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie edit form data", body = AdminMovieResponse),
        (status = 404, description = "Movie not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_get_movie(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = MovieService::new(db);
    let movie = service.get_by_id(id).await?;
    let response = admin_movie_response(&service, movie).await?;

    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    put,
    path = "/admin/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = AdminMovieResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Movie not found", body = AppError),
        (status = 409, description = "Slug already in use", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_update_movie(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let service = MovieService::new(db);
    let movie = service.update(id, MovieInput::from(payload)).await?;
    let response = admin_movie_response(&service, movie).await?;

    Ok(ApiResponse::ok(response))
}

#[utoipa::path(
    delete,
    path = "/admin/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie deleted", body = String),
        (status = 404, description = "Movie not found", body = AppError),
    ),
    tag = "admin"
)]
pub async fn admin_delete_movie(
    Extension(db): Extension<DatabaseConnection>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let service = MovieService::new(db);
    service.delete(id).await?;

    Ok(ApiResponse::ok("Movie deleted"))
}

#[utoipa::path(
    post,
    path = "/admin/movies/publish",
    request_body = BulkMovieIdsRequest,
    responses(
        (status = 200, description = "Selection published", body = BulkUpdateResponse),
    ),
    tag = "admin"
)]
pub async fn publish_movies(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<BulkMovieIdsRequest>,
) -> AppResult<impl IntoResponse> {
    let service = MovieService::new(db);
    let updated = service.set_draft(&payload.ids, false).await?;

    Ok(ApiResponse::with_message(
        BulkUpdateResponse { updated },
        bulk_update_message(updated),
    ))
}

#[utoipa::path(
    post,
    path = "/admin/movies/unpublish",
    request_body = BulkMovieIdsRequest,
    responses(
        (status = 200, description = "Selection reverted to draft", body = BulkUpdateResponse),
    ),
    tag = "admin"
)]
pub async fn unpublish_movies(
    Extension(db): Extension<DatabaseConnection>,
    Json(payload): Json<BulkMovieIdsRequest>,
) -> AppResult<impl IntoResponse> {
    let service = MovieService::new(db);
    let updated = service.set_draft(&payload.ids, true).await?;

    Ok(ApiResponse::with_message(
        BulkUpdateResponse { updated },
        bulk_update_message(updated),
    ))
}
