use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories_table;
mod m20240101_000002_create_actors_table;
mod m20240101_000003_create_genres_table;
mod m20240101_000004_create_movies_table;
mod m20240101_000005_create_movie_link_tables;
mod m20240101_000006_create_movie_shorts_table;
mod m20240101_000007_create_rating_stars_table;
mod m20240101_000008_create_ratings_table;
mod m20240101_000009_create_reviews_table;
mod m20240101_000010_add_review_parent_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories_table::Migration),
            Box::new(m20240101_000002_create_actors_table::Migration),
            Box::new(m20240101_000003_create_genres_table::Migration),
            Box::new(m20240101_000004_create_movies_table::Migration),
            Box::new(m20240101_000005_create_movie_link_tables::Migration),
            Box::new(m20240101_000006_create_movie_shorts_table::Migration),
            Box::new(m20240101_000007_create_rating_stars_table::Migration),
            Box::new(m20240101_000008_create_ratings_table::Migration),
            Box::new(m20240101_000009_create_reviews_table::Migration),
            Box::new(m20240101_000010_add_review_parent_index::Migration),
        ]
    }
}
