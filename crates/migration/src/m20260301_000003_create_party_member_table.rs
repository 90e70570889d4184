use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_create_member_table::Member,
    m20260301_000002_create_party_table::Party,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(table()).await?;

        // Lookups go party -> members and member -> parties. No unique pair:
        // the same member may join a party more than once.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_party_member_party_id")
                    .table(PartyMember::Table)
                    .col(PartyMember::PartyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_party_member_member_id")
                    .table(PartyMember::Table)
                    .col(PartyMember::MemberId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartyMember::Table).if_exists().to_owned())
            .await
    }
}

fn table() -> TableCreateStatement {
    Table::create()
        .table(PartyMember::Table)
        .if_not_exists()
        .col(big_integer(PartyMember::Id).auto_increment().primary_key())
        .col(big_integer(PartyMember::PartyId))
        .col(big_integer(PartyMember::MemberId))
        .col(boolean(PartyMember::IsPartyLeader).default(false))
        .col(boolean(PartyMember::IsSpecialUser).default(false))
        .foreign_key(
            ForeignKey::create()
                .name("fk_party_member_party_id")
                .from(PartyMember::Table, PartyMember::PartyId)
                .to(Party::Table, Party::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_party_member_member_id")
                .from(PartyMember::Table, PartyMember::MemberId)
                .to(Member::Table, Member::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum PartyMember {
    Table,
    Id,
    PartyId,
    MemberId,
    IsPartyLeader,
    IsSpecialUser,
}
