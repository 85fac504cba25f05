use crate::{
    error::{AppError, AppResult},
    models::{movie_short, Movie, MovieShort, MovieShortModel},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct MovieShortService {
    db: DatabaseConnection,
}

impl MovieShortService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, movie_id: Option<i32>) -> AppResult<Vec<MovieShortModel>> {
        let mut query = MovieShort::find();
        if let Some(id) = movie_id {
            query = query.filter(movie_short::Column::MovieId.eq(id));
        }
        let shorts = query
            .order_by_asc(movie_short::Column::Id)
            .all(&self.db)
            .await?;
        Ok(shorts)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<MovieShortModel> {
        MovieShort::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(
        &self,
        title: &str,
        description: &str,
        image: &str,
        movie_id: i32,
    ) -> AppResult<MovieShortModel> {
        self.ensure_movie_exists(movie_id).await?;

        let new_short = movie_short::ActiveModel {
            title: Set(title.to_string()),
            description: Set(description.to_string()),
            image: Set(image.to_string()),
            movie_id: Set(movie_id),
            ..Default::default()
        };

        let short = new_short.insert(&self.db).await?;
        Ok(short)
    }

    pub async fn update(
        &self,
        id: i32,
        title: &str,
        description: &str,
        image: &str,
        movie_id: i32,
    ) -> AppResult<MovieShortModel> {
        let existing = self.get_by_id(id).await?;
        self.ensure_movie_exists(movie_id).await?;

        let mut active: movie_short::ActiveModel = existing.into();
        active.title = Set(title.to_string());
        active.description = Set(description.to_string());
        active.image = Set(image.to_string());
        active.movie_id = Set(movie_id);

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;
        MovieShort::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn ensure_movie_exists(&self, movie_id: i32) -> AppResult<()> {
        Movie::find_by_id(movie_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Movie {} does not exist", movie_id)))?;
        Ok(())
    }
}
