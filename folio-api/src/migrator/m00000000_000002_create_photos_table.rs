use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m00000000_000002_create_photos_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Photos::Table)
                    .col(
                        ColumnDef::new(Photos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Photos::Caption).string_len(200).not_null())
                    .col(ColumnDef::new(Photos::FileName).string_len(255).not_null())
                    .col(ColumnDef::new(Photos::FilePath).string_len(500).not_null())
                    .col(ColumnDef::new(Photos::ContentType).string_len(100))
                    .col(
                        ColumnDef::new(Photos::FileSize)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Photos::UploadedDate).date_time().not_null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx-photos-uploaded_date")
                    .table(Photos::Table)
                    .col(Photos::UploadedDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Photos {
    Table,
    Id,
    Caption,
    FileName,
    FilePath,
    ContentType,
    FileSize,
    UploadedDate,
}
