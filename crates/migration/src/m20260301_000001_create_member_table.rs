use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_member_username")
                    .table(Member::Table)
                    .col(Member::Username)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Member::Table).if_exists().to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Member::Table)
        .if_not_exists()
        .col(big_integer(Member::Id).auto_increment().primary_key())
        .col(string(Member::Username))
        .col(
            timestamp_with_time_zone(Member::CreatedAt)
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Member {
    Table,
    Id,
    Username,
    CreatedAt,
}
