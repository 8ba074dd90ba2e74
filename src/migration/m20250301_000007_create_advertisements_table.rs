use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Advertisements {
    Table,
    Id,
    PropertyId,
    Title,
    Location,
    Image,
    Price,
    AgentEmail,
    AgentName,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advertisements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Advertisements::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Advertisements::PropertyId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Advertisements::Title)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Advertisements::Location)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Advertisements::Image).text().null())
                    .col(ColumnDef::new(Advertisements::Price).double().not_null())
                    .col(
                        ColumnDef::new(Advertisements::AgentEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Advertisements::AgentName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Advertisements::CreatedAt)
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
                    .name("idx_advertisements_property_id")
                    .table(Advertisements::Table)
                    .col(Advertisements::PropertyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advertisements::Table).to_owned())
            .await
    }
}
