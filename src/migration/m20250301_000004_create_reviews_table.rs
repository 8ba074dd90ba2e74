use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    PropertyId,
    PropertyTitle,
    ReviewerName,
    ReviewerEmail,
    ReviewerImage,
    AgentName,
    Description,
    Rating,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::PropertyId).string_len(64).not_null())
                    .col(ColumnDef::new(Reviews::PropertyTitle).string_len(255).null())
                    .col(
                        ColumnDef::new(Reviews::ReviewerName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reviews::ReviewerEmail).string_len(255).null())
                    .col(ColumnDef::new(Reviews::ReviewerImage).text().null())
                    .col(ColumnDef::new(Reviews::AgentName).string_len(255).null())
                    .col(ColumnDef::new(Reviews::Description).text().not_null())
                    .col(
                        ColumnDef::new(Reviews::Rating)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_reviewer_name")
                    .table(Reviews::Table)
                    .col(Reviews::ReviewerName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}
