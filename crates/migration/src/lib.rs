//! # Signiel Migrations
//!
//! Creates the `member`, `party`, `party_member` and `authority` tables in
//! dependency order.

pub use sea_orm_migration::prelude::*;

pub mod db;
mod m20260301_000001_create_member_table;
mod m20260301_000002_create_party_table;
mod m20260301_000003_create_party_member_table;
mod m20260301_000004_create_authority_table;

/// Runs every schema migration in order.
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_member_table::Migration),
            Box::new(m20260301_000002_create_party_table::Migration),
            Box::new(m20260301_000003_create_party_member_table::Migration),
            Box::new(m20260301_000004_create_authority_table::Migration),
        ]
    }
}
