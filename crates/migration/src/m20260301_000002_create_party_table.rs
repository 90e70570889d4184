use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> { manager.create_table(table()).await }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Party::Table).if_exists().to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Party::Table)
        .if_not_exists()
        .col(big_integer(Party::Id).auto_increment().primary_key())
        .col(string(Party::Name))
        .col(
            timestamp_with_time_zone(Party::CreatedAt)
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Party {
    Table,
    Id,
    Name,
    CreatedAt,
}
