use crate::handlers;
use axum::{routing, Router};

pub fn create_routes() -> Router {
    public_routes().nest("/admin", admin_routes())
}

/// The visitor-facing surface: the published catalog, movie detail, and
/// review submission.
fn public_routes() -> Router {
    Router::new()
        .route("/movies", routing::get(handlers::movie::list_movies))
        .route("/movies/{id}", routing::get(handlers::movie::get_movie))
        .route("/review", routing::post(handlers::review::create_review))
}

/// Staff console. Deployments are expected to gate this prefix at the
/// proxy; the application itself carries no authentication.
fn admin_routes() -> Router {
    Router::new()
        // Movies
        .route(
            "/movies",
            routing::get(handlers::movie::admin_list_movies)
                .post(handlers::movie::admin_create_movie),
        )
        .route(
            "/movies/publish",
            routing::post(handlers::movie::publish_movies),
        )
        .route(
            "/movies/unpublish",
            routing::post(handlers::movie::unpublish_movies),
        )
        .route(
            "/movies/{id}",
            routing::get(handlers::movie::admin_get_movie)
                .put(handlers::movie::admin_update_movie)
                .delete(handlers::movie::admin_delete_movie),
        )
        // Categories
        .route(
            "/categories",
            routing::get(handlers::category::admin_list_categories)
                .post(handlers::category::admin_create_category),
        )
        .route(
            "/categories/{id}",
            routing::get(handlers::category::admin_get_category)
                .put(handlers::category::admin_update_category)
                .delete(handlers::category::admin_delete_category),
        )
        // Genres
        .route(
            "/genres",
            routing::get(handlers::genre::admin_list_genres)
                .post(handlers::genre::admin_create_genre),
        )
        .route(
            "/genres/{id}",
            routing::get(handlers::genre::admin_get_genre)
                .put(handlers::genre::admin_update_genre)
                .delete(handlers::genre::admin_delete_genre),
        )
        // Actors and directors
        .route(
            "/actors",
            routing::get(handlers::actor::admin_list_actors)
                .post(handlers::actor::admin_create_actor),
        )
        .route(
            "/actors/{id}",
            routing::get(handlers::actor::admin_get_actor)
                .put(handlers::actor::admin_update_actor)
                .delete(handlers::actor::admin_delete_actor),
        )
        // Movie stills
        .route(
            "/movie-shorts",
            routing::get(handlers::movie_short::admin_list_movie_shorts)
                .post(handlers::movie_short::admin_create_movie_short),
        )
        .route(
            "/movie-shorts/{id}",
            routing::get(handlers::movie_short::admin_get_movie_short)
                .put(handlers::movie_short::admin_update_movie_short)
                .delete(handlers::movie_short::admin_delete_movie_short),
        )
        // Rating stars
        .route(
            "/rating-stars",
            routing::get(handlers::rating::admin_list_rating_stars)
                .post(handlers::rating::admin_create_rating_star),
        )
        .route(
            "/rating-stars/{id}",
            routing::delete(handlers::rating::admin_delete_rating_star),
        )
        // Ratings
        .route(
            "/ratings",
            routing::get(handlers::rating::admin_list_ratings)
                .post(handlers::rating::admin_create_rating),
        )
        .route(
            "/ratings/{id}",
            routing::delete(handlers::rating::admin_delete_rating),
        )
        // Reviews (created by visitors, moderated here)
        .route(
            "/reviews",
            routing::get(handlers::review::admin_list_reviews),
        )
        .route(
            "/reviews/{id}",
            routing::delete(handlers::review::admin_delete_review),
        )
}
