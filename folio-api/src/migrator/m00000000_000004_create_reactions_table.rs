use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m00000000_000004_create_reactions_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reactions::Table)
                    .col(
                        ColumnDef::new(Reactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reactions::ContentType).string_len(10).not_null())
                    .col(ColumnDef::new(Reactions::ContentId).integer().not_null())
                    .col(ColumnDef::new(Reactions::ReactionType).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Reactions::UserIdentifier)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reactions::CreatedDate).date_time().not_null())
                    .to_owned(),
            )
            .await?;
        // One row per (content, reaction, user) tuple, enforced by the database.
        manager
            .create_index(
                Index::create()
                    .name("idx-reactions-unique")
                    .table(Reactions::Table)
                    .col(Reactions::ContentType)
                    .col(Reactions::ContentId)
                    .col(Reactions::ReactionType)
                    .col(Reactions::UserIdentifier)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-reactions-content")
                    .table(Reactions::Table)
                    .col(Reactions::ContentType)
                    .col(Reactions::ContentId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reactions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reactions {
    Table,
    Id,
    ContentType,
    ContentId,
    ReactionType,
    UserIdentifier,
    CreatedDate,
}
