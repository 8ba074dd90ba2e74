use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Offers {
    Table,
    Id,
    PropertyId,
    Title,
    Location,
    Image,
    AgentEmail,
    AgentName,
    BuyerEmail,
    BuyerName,
    OfferedPrice,
    Status,
    TransactionId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Offers::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Offers::PropertyId).string_len(64).not_null())
                    .col(ColumnDef::new(Offers::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Offers::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Offers::Image).text().null())
                    .col(ColumnDef::new(Offers::AgentEmail).string_len(255).not_null())
                    .col(ColumnDef::new(Offers::AgentName).string_len(255).not_null())
                    .col(ColumnDef::new(Offers::BuyerEmail).string_len(255).not_null())
                    .col(ColumnDef::new(Offers::BuyerName).string_len(255).null())
                    .col(ColumnDef::new(Offers::OfferedPrice).double().not_null())
                    .col(
                        ColumnDef::new(Offers::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Offers::TransactionId).string_len(255).null())
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
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
                    .name("idx_offers_buyer_email")
                    .table(Offers::Table)
                    .col(Offers::BuyerEmail)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offers_agent_status")
                    .table(Offers::Table)
                    .col(Offers::AgentEmail)
                    .col(Offers::Status)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await
    }
}
