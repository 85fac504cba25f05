use crate::{
    error::{AppError, AppResult},
    models::{genre, Genre, GenreModel},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct GenreService {
    db: DatabaseConnection,
}

impl GenreService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<GenreModel>> {
        let genres = Genre::find()
            .order_by_asc(genre::Column::Id)
            .all(&self.db)
            .await?;
        Ok(genres)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<GenreModel> {
        Genre::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(&self, name: &str, description: &str, slug: &str) -> AppResult<GenreModel> {
        self.ensure_slug_free(slug, None).await?;

        let new_genre = genre::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            slug: Set(slug.to_string()),
            ..Default::default()
        };

        let genre = new_genre.insert(&self.db).await?;
        Ok(genre)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        description: &str,
        slug: &str,
    ) -> AppResult<GenreModel> {
        let existing = self.get_by_id(id).await?;
        self.ensure_slug_free(slug, Some(existing.id)).await?;

        let mut active: genre::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.description = Set(description.to_string());
        active.slug = Set(slug.to_string());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;
        Genre::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, exclude_id: Option<i32>) -> AppResult<()> {
        let mut query = Genre::find().filter(genre::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(genre::Column::Id.ne(id));
        }
        if query.one(&self.db).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Genre slug '{}' is already in use",
                slug
            )));
        }
        Ok(())
    }
}
