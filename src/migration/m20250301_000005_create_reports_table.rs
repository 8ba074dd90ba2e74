use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Reports {
    Table,
    Id,
    PropertyId,
    PropertyTitle,
    AgentName,
    ReporterName,
    ReporterEmail,
    Description,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reports::Id)
                            .string_len(64)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reports::PropertyId).string_len(64).not_null())
                    .col(ColumnDef::new(Reports::PropertyTitle).string_len(255).null())
                    .col(ColumnDef::new(Reports::AgentName).string_len(255).null())
                    .col(
                        ColumnDef::new(Reports::ReporterName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reports::ReporterEmail)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reports::Description).text().not_null())
                    .col(
                        ColumnDef::new(Reports::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reports::Table).to_owned())
            .await
    }
}
