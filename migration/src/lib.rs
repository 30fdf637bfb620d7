pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_user_table;
mod m20240301_000002_create_category_table;
mod m20240301_000003_create_server_table;
mod m20240301_000004_create_server_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_user_table::Migration),
            Box::new(m20240301_000002_create_category_table::Migration),
            Box::new(m20240301_000003_create_server_table::Migration),
            Box::new(m20240301_000004_create_server_member_table::Migration),
        ]
    }
}
