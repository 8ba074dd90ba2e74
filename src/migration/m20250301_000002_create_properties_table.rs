use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Title,
    Location,
    Image,
    Price,
    AgentEmail,
    AgentName,
    AgentImage,
    Status,
    AdsStatus,
    IsDeleted,
    Reviews,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Properties::Location)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Image).text().null())
                    .col(ColumnDef::new(Properties::Price).double().not_null())
                    .col(
                        ColumnDef::new(Properties::AgentEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::AgentName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::AgentImage).text().null())
                    .col(
                        ColumnDef::new(Properties::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Properties::AdsStatus)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Properties::Reviews).json_binary().not_null())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
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
                    .name("idx_properties_status_deleted")
                    .table(Properties::Table)
                    .col(Properties::Status)
                    .col(Properties::IsDeleted)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_agent_email")
                    .table(Properties::Table)
                    .col(Properties::AgentEmail)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}
