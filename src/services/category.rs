use crate::{
    error::{AppError, AppResult},
    models::{category, Category, CategoryModel},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CategoryService {
    db: DatabaseConnection,
}

impl CategoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> AppResult<Vec<CategoryModel>> {
        let categories = Category::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<CategoryModel> {
        Category::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        slug: &str,
    ) -> AppResult<CategoryModel> {
        self.ensure_slug_free(slug, None).await?;

        let new_category = category::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            slug: Set(slug.to_string()),
            ..Default::default()
        };

        let category = new_category.insert(&self.db).await?;
        Ok(category)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        description: &str,
        slug: &str,
    ) -> AppResult<CategoryModel> {
        let existing = self.get_by_id(id).await?;
        self.ensure_slug_free(slug, Some(existing.id)).await?;

        let mut active: category::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.description = Set(description.to_string());
        active.slug = Set(slug.to_string());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    /// Movies referencing the category keep their rows; the foreign key
    /// is nulled by the store.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;
        Category::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, exclude_id: Option<i32>) -> AppResult<()> {
        let mut query = Category::find().filter(category::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(category::Column::Id.ne(id));
        }
        if query.one(&self.db).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Category slug '{}' is already in use",
                slug
            )));
        }
        Ok(())
    }
}
