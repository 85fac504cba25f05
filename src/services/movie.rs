use crate::{
    error::{AppError, AppResult},
    models::{
        actor, category, genre, movie, movie_actor, movie_director, movie_genre, Actor, Category,
        CategoryModel, Genre, Movie, MovieActor, MovieDirector, MovieGenre, MovieModel,
    },
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::BTreeSet;

/// Everything a movie create/update carries, relations included.
pub struct MovieInput {
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub poster: String,
    pub year: i16,
    pub country: String,
    pub world_premiere: chrono::NaiveDate,
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

/// A movie with its relations resolved to display names.
pub struct MovieDetail {
    pub movie: MovieModel,
    pub category: Option<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
    pub genres: Vec<String>,
}

pub struct MovieService {
    db: DatabaseConnection,
}

impl MovieService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// The public catalog: published movies only.
    pub async fn list_published(&self) -> AppResult<Vec<MovieModel>> {
        let movies = Movie::find()
            .filter(movie::Column::Draft.eq(false))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        Ok(movies)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MovieModel> {
        Movie::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Detail lookup ignores the draft flag: drafts stay fetchable by id.
    pub async fn get_detail(&self, id: i32) -> AppResult<MovieDetail> {
        let movie = self.get_by_id(id).await?;

        let category = match movie.category_id {
            Some(cid) => Category::find_by_id(cid)
                .one(&self.db)
                .await?
                .map(|c| c.name),
            None => None,
        };

        let (actor_ids, director_ids, genre_ids) = self.link_ids(id).await?;
        let actors = self.actor_names(&actor_ids).await?;
        let directors = self.actor_names(&director_ids).await?;
        let genres = self.genre_names(&genre_ids).await?;

        Ok(MovieDetail {
            movie,
            category,
            actors,
            directors,
            genres,
        })
    }

    /// Related ids for one movie: (actors, directors, genres).
    pub async fn link_ids(&self, movie_id: i32) -> AppResult<(Vec<i32>, Vec<i32>, Vec<i32>)> {
        let actor_ids = MovieActor::find()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_actor::Column::ActorId)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| link.actor_id)
            .collect();

        let director_ids = MovieDirector::find()
            .filter(movie_director::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_director::Column::ActorId)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| link.actor_id)
            .collect();

        let genre_ids = MovieGenre::find()
            .filter(movie_genre::Column::MovieId.eq(movie_id))
            .order_by_asc(movie_genre::Column::GenreId)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| link.genre_id)
            .collect();

        Ok((actor_ids, director_ids, genre_ids))
    }

    pub async fn list_admin(
        &self,
        page: u64,
        per_page: u64,
        search: Option<&str>,
        category_id: Option<i32>,
        year: Option<i16>,
    ) -> AppResult<(Vec<(MovieModel, Option<CategoryModel>)>, u64)> {
        let mut query = Movie::find().find_also_related(Category);

        if let Some(q) = search {
            query = query.filter(
                Condition::any()
                    .add(movie::Column::Title.contains(q))
                    .add(category::Column::Name.contains(q)),
            );
        }
        if let Some(cid) = category_id {
            query = query.filter(movie::Column::CategoryId.eq(cid));
        }
        if let Some(y) = year {
            query = query.filter(movie::Column::Year.eq(y));
        }

        let paginator = query
            .order_by_desc(movie::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let movies = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((movies, total))
    }

    pub async fn create(&self, input: MovieInput) -> AppResult<MovieModel> {
        self.ensure_slug_free(&input.slug, None).await?;
        self.validate_relations(&input).await?;

        let new_movie = movie::ActiveModel {
            title: Set(input.title.clone()),
            tagline: Set(input.tagline.clone()),
            description: Set(input.description.clone()),
            poster: Set(input.poster.clone()),
            year: Set(input.year),
            country: Set(input.country.clone()),
            world_premiere: Set(input.world_premiere),
            budget: Set(input.budget),
            fees_in_usa: Set(input.fees_in_usa),
            fees_in_world: Set(input.fees_in_world),
            category_id: Set(input.category_id),
            slug: Set(input.slug.clone()),
            draft: Set(input.draft),
            ..Default::default()
        };

        let movie = new_movie.insert(&self.db).await?;
        self.replace_links(movie.id, &input).await?;
        Ok(movie)
    }

    pub async fn update(&self, id: i32, input: MovieInput) -> AppResult<MovieModel> {
        let existing = self.get_by_id(id).await?;
        self.ensure_slug_free(&input.slug, Some(existing.id)).await?;
        self.validate_relations(&input).await?;

        let mut active: movie::ActiveModel = existing.into();
        active.title = Set(input.title.clone());
        active.tagline = Set(input.tagline.clone());
        active.description = Set(input.description.clone());
        active.poster = Set(input.poster.clone());
        active.year = Set(input.year);
        active.country = Set(input.country.clone());
        active.world_premiere = Set(input.world_premiere);
        active.budget = Set(input.budget);
        active.fees_in_usa = Set(input.fees_in_usa);
        active.fees_in_world = Set(input.fees_in_world);
        active.category_id = Set(input.category_id);
        active.slug = Set(input.slug.clone());
        active.draft = Set(input.draft);

        let updated = active.update(&self.db).await?;
        self.replace_links(updated.id, &input).await?;
        Ok(updated)
    }

    /// Cascades to stills, ratings, and reviews.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;
        Movie::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    /// One atomic update-by-filter across the selection. Returns the
    /// number of rows the store reports as touched.
    pub async fn set_draft(&self, ids: &[i32], draft: bool) -> AppResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = Movie::update_many()
            .col_expr(movie::Column::Draft, Expr::value(draft))
            .filter(movie::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn ensure_slug_free(&self, slug: &str, exclude_id: Option<i32>) -> AppResult<()> {
        let mut query = Movie::find().filter(movie::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(movie::Column::Id.ne(id));
        }
        if query.one(&self.db).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Movie slug '{}' is already in use",
                slug
            )));
        }
        Ok(())
    }

    async fn validate_relations(&self, input: &MovieInput) -> AppResult<()> {
        if let Some(cid) = input.category_id {
            Category::find_by_id(cid)
                .one(&self.db)
                .await?
                .ok_or_else(|| {
                    AppError::Validation(format!("Category {} does not exist", cid))
                })?;
        }

        self.ensure_actors_exist(&input.actor_ids, "actor").await?;
        self.ensure_actors_exist(&input.director_ids, "director")
            .await?;
        self.ensure_genres_exist(&input.genre_ids).await?;
        Ok(())
    }

    async fn ensure_actors_exist(&self, ids: &[i32], role: &str) -> AppResult<()> {
        let unique = dedup(ids);
        if unique.is_empty() {
            return Ok(());
        }
        let found = Actor::find()
            .filter(actor::Column::Id.is_in(unique.clone()))
            .count(&self.db)
            .await?;
        if found != unique.len() as u64 {
            return Err(AppError::Validation(format!(
                "One or more {} ids do not exist",
                role
            )));
        }
        Ok(())
    }

    async fn ensure_genres_exist(&self, ids: &[i32]) -> AppResult<()> {
        let unique = dedup(ids);
        if unique.is_empty() {
            return Ok(());
        }
        let found = Genre::find()
            .filter(genre::Column::Id.is_in(unique.clone()))
            .count(&self.db)
            .await?;
        if found != unique.len() as u64 {
            return Err(AppError::Validation(
                "One or more genre ids do not exist".to_string(),
            ));
        }
        Ok(())
    }

    async fn replace_links(&self, movie_id: i32, input: &MovieInput) -> AppResult<()> {
        MovieActor::delete_many()
            .filter(movie_actor::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;
        MovieDirector::delete_many()
            .filter(movie_director::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;
        MovieGenre::delete_many()
            .filter(movie_genre::Column::MovieId.eq(movie_id))
            .exec(&self.db)
            .await?;

        let actor_links: Vec<movie_actor::ActiveModel> = dedup(&input.actor_ids)
            .into_iter()
            .map(|aid| movie_actor::ActiveModel {
                movie_id: Set(movie_id),
                actor_id: Set(aid),
            })
            .collect();
        if !actor_links.is_empty() {
            MovieActor::insert_many(actor_links).exec(&self.db).await?;
        }

        let director_links: Vec<movie_director::ActiveModel> = dedup(&input.director_ids)
            .into_iter()
            .map(|aid| movie_director::ActiveModel {
                movie_id: Set(movie_id),
                actor_id: Set(aid),
            })
            .collect();
        if !director_links.is_empty() {
            MovieDirector::insert_many(director_links)
                .exec(&self.db)
                .await?;
        }

        let genre_links: Vec<movie_genre::ActiveModel> = dedup(&input.genre_ids)
            .into_iter()
            .map(|gid| movie_genre::ActiveModel {
                movie_id: Set(movie_id),
                genre_id: Set(gid),
            })
            .collect();
        if !genre_links.is_empty() {
            MovieGenre::insert_many(genre_links).exec(&self.db).await?;
        }

        Ok(())
    }

    async fn actor_names(&self, ids: &[i32]) -> AppResult<Vec<String>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let names = Actor::find()
            .filter(actor::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(actor::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|a| a.name)
            .collect();
        Ok(names)
    }

    async fn genre_names(&self, ids: &[i32]) -> AppResult<Vec<String>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let names = Genre::find()
            .filter(genre::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(genre::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|g| g.name)
            .collect();
        Ok(names)
    }
}

fn dedup(ids: &[i32]) -> Vec<i32> {
    let unique: BTreeSet<i32> = ids.iter().copied().collect();
    unique.into_iter().collect()
}

/// Operator-facing report for the bulk publish/unpublish actions.
pub fn bulk_update_message(rows: u64) -> String {
    if rows == 1 {
        "1 movie updated".to_string()
    } else {
        format!("{} movies updated", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_message_singular() {
        assert_eq!(bulk_update_message(1), "1 movie updated");
    }

    #[test]
    fn report_message_plural() {
        assert_eq!(bulk_update_message(3), "3 movies updated");
    }

    #[test]
    fn report_message_zero_rows() {
        assert_eq!(bulk_update_message(0), "0 movies updated");
    }

    #[test]
    fn dedup_drops_repeats_and_sorts() {
        assert_eq!(dedup(&[3, 1, 3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn dedup_empty_stays_empty() {
        assert!(dedup(&[]).is_empty());
    }
}
