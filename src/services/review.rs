use crate::{
    error::{AppError, AppResult},
    models::{review, Movie, Review, ReviewModel},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ReviewService {
    db: DatabaseConnection,
}

impl ReviewService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_by_movie(&self, movie_id: i32) -> AppResult<Vec<ReviewModel>> {
        let reviews = Review::find()
            .filter(review::Column::MovieId.eq(movie_id))
            .order_by_asc(review::Column::Id)
            .all(&self.db)
            .await?;
        Ok(reviews)
    }

    pub async fn create(
        &self,
        email: &str,
        name: &str,
        text: &str,
        movie_id: i32,
        parent_id: Option<i32>,
    ) -> AppResult<ReviewModel> {
        Movie::find_by_id(movie_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Movie {} does not exist", movie_id)))?;

        // The parent only has to exist. It may sit on another movie; such
        // replies are accepted and simply never show up in that movie's
        // tree.
        if let Some(pid) = parent_id {
            Review::find_by_id(pid)
                .one(&self.db)
                .await?
                .ok_or_else(|| {
                    AppError::Validation(format!("Parent review {} does not exist", pid))
                })?;
        }

        let new_review = review::ActiveModel {
            email: Set(email.to_string()),
            name: Set(name.to_string()),
            text: Set(text.to_string()),
            movie_id: Set(movie_id),
            parent_id: Set(parent_id),
            ..Default::default()
        };

        let review = new_review.insert(&self.db).await?;
        Ok(review)
    }

    pub async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<ReviewModel>, u64)> {
        let paginator = Review::find()
            .order_by_desc(review::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let reviews = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((reviews, total))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ReviewModel> {
        Review::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Replies to the deleted review are kept; the store nulls their
    /// parent reference, promoting them to top level.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;
        Review::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
