use crate::{
    error::{AppError, AppResult},
    models::{actor, Actor, ActorModel},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder,
};

pub struct ActorService {
    db: DatabaseConnection,
}

impl ActorService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, page: u64, per_page: u64) -> AppResult<(Vec<ActorModel>, u64)> {
        let paginator = Actor::find()
            .order_by_asc(actor::Column::Id)
            .paginate(&self.db, per_page);

        let total = paginator.num_items().await?;
        let actors = paginator.fetch_page(page.saturating_sub(1)).await?;
        Ok((actors, total))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ActorModel> {
        Actor::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn create(
        &self,
        name: &str,
        age: i16,
        description: &str,
        image: &str,
    ) -> AppResult<ActorModel> {
        let new_actor = actor::ActiveModel {
            name: Set(name.to_string()),
            age: Set(age),
            description: Set(description.to_string()),
            image: Set(image.to_string()),
            ..Default::default()
        };

        let actor = new_actor.insert(&self.db).await?;
        Ok(actor)
    }

    pub async fn update(
        &self,
        id: i32,
        name: &str,
        age: i16,
        description: &str,
        image: &str,
    ) -> AppResult<ActorModel> {
        let existing = self.get_by_id(id).await?;

        let mut active: actor::ActiveModel = existing.into();
        active.name = Set(name.to_string());
        active.age = Set(age);
        active.description = Set(description.to_string());
        active.image = Set(image.to_string());

        let updated = active.update(&self.db).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.get_by_id(id).await?;
        Actor::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
