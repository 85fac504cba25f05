use crate::{
    error::{AppError, AppResult},
    models::{
        rating, rating_star, Movie, Rating, RatingModel, RatingStar, RatingStarModel,
    },
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder,
};

pub struct RatingService {
    db: DatabaseConnection,
}

impl RatingService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stars are listed highest first.
    pub async fn list_stars(&self) -> AppResult<Vec<RatingStarModel>> {
        let stars = RatingStar::find()
            .order_by_desc(rating_star::Column::Value)
            .all(&self.db)
            .await?;
        Ok(stars)
    }

    pub async fn create_star(&self, value: i16) -> AppResult<RatingStarModel> {
        let new_star = rating_star::ActiveModel {
            value: Set(value),
            ..Default::default()
        };

        let star = new_star.insert(&self.db).await?;
        Ok(star)
    }

    /// Cascades to every rating referencing the star.
    pub async fn delete_star(&self, id: i32) -> AppResult<()> {
        RatingStar::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        RatingStar::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn list_ratings(
        &self,
        page: u64,
        per_page: u64,
    ) -> AppResult<(Vec<(RatingModel, Option<RatingStarModel>)>, u64)> {
        let paginator = Rating::find()
            .find_also_related(RatingStar)
            .order_by_desc(rating::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let ratings = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((ratings, total))
    }

    pub async fn create_rating(
        &self,
        ip: &str,
        star_id: i32,
        movie_id: i32,
    ) -> AppResult<RatingModel> {
        RatingStar::find_by_id(star_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Star {} does not exist", star_id)))?;
        Movie::find_by_id(movie_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::Validation(format!("Movie {} does not exist", movie_id)))?;

        let new_rating = rating::ActiveModel {
            ip: Set(ip.to_string()),
            star_id: Set(star_id),
            movie_id: Set(movie_id),
            ..Default::default()
        };

        let rating = new_rating.insert(&self.db).await?;
        Ok(rating)
    }

    pub async fn delete_rating(&self, id: i32) -> AppResult<()> {
        Rating::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;
        Rating::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
