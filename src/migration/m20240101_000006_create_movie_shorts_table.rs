use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum MovieShorts {
    Table,
    Id,
    Title,
    Description,
    Image,
    MovieId,
}

#[derive(DeriveIden)]
enum Movies {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieShorts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MovieShorts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(MovieShorts::Title)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MovieShorts::Description).text().not_null())
                    .col(ColumnDef::new(MovieShorts::Image).string().not_null())
                    .col(ColumnDef::new(MovieShorts::MovieId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_shorts_movie_id")
                            .from(MovieShorts::Table, MovieShorts::MovieId)
                            .to(Movies::Table, Movies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_shorts_movie_id")
                    .table(MovieShorts::Table)
                    .col(MovieShorts::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieShorts::Table).to_owned())
            .await
    }
}
