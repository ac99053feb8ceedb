//! Schema for the `users`, `posts`, `likes` and `preferences` collections.

pub use sea_orm_migration::prelude::*;

mod m20261014_000001_create_tables;
mod m20261014_000002_create_preferences;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261014_000001_create_tables::Migration),
            Box::new(m20261014_000002_create_preferences::Migration),
        ]
    }
}
