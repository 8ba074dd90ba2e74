use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_properties_table;
mod m20250301_000003_create_offers_table;
mod m20250301_000004_create_reviews_table;
mod m20250301_000005_create_reports_table;
mod m20250301_000006_create_wishlists_table;
mod m20250301_000007_create_advertisements_table;
mod m20250301_000008_create_payments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_properties_table::Migration),
            Box::new(m20250301_000003_create_offers_table::Migration),
            Box::new(m20250301_000004_create_reviews_table::Migration),
            Box::new(m20250301_000005_create_reports_table::Migration),
            Box::new(m20250301_000006_create_wishlists_table::Migration),
            Box::new(m20250301_000007_create_advertisements_table::Migration),
            Box::new(m20250301_000008_create_payments_table::Migration),
        ]
    }
}
