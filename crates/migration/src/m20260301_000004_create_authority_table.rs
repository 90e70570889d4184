use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_create_member_table::Member;

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
                    .name("idx_authority_member")
                    .table(Authority::Table)
                    .col(Authority::Member)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authority::Table).if_exists().to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(Authority::Table)
        .if_not_exists()
        .col(big_integer(Authority::Id).auto_increment().primary_key())
        .col(string_null(Authority::Name))
        .col(big_integer_null(Authority::Member))
        .foreign_key(
            ForeignKey::create()
                .name("fk_authority_member")
                .from(Authority::Table, Authority::Member)
                .to(Member::Table, Member::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

/// The owning member lives in a column named `member`.
#[derive(DeriveIden)]
pub enum Authority {
    Table,
    Id,
    Name,
    Member,
}
