use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Wishlists {
    Table,
    Id,
    PropertyId,
    BuyerEmail,
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
                    .table(Wishlists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wishlists::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Wishlists::PropertyId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Wishlists::BuyerEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Wishlists::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Wishlists::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Wishlists::Image).text().null())
                    .col(ColumnDef::new(Wishlists::Price).double().not_null())
                    .col(
                        ColumnDef::new(Wishlists::AgentEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Wishlists::AgentName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Wishlists::CreatedAt)
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
                    .name("idx_wishlists_buyer_email")
                    .table(Wishlists::Table)
                    .col(Wishlists::BuyerEmail)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wishlists::Table).to_owned())
            .await
    }
}
