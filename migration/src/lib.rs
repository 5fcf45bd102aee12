pub use sea_orm_migration::prelude::*;

mod m20260810_090000_create_users_table;
mod m20260810_090100_create_veterinarians_table;
mod m20260810_090200_create_appointments_table;
mod m20260810_090300_create_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_090000_create_users_table::Migration),
            Box::new(m20260810_090100_create_veterinarians_table::Migration),
            Box::new(m20260810_090200_create_appointments_table::Migration),
            Box::new(m20260810_090300_create_messages_table::Migration),
        ]
    }
}
