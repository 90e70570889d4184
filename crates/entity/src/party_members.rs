//! Party Members Entity
//!
//! Join row between a party and a member, flagged for leadership and special status.
//!
//! CUSTOMIZATION REGION START: party_members_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "party_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:              i64,
    pub party_id:        i64,
    pub member_id:       i64,
    pub is_party_leader: bool,
    pub is_special_user: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parties::Entity",
        from = "Column::PartyId",
        to = "super::parties::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Party,
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::parties::Entity> for Entity {
    fn to() -> RelationDef { Relation::Party.def() }
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef { Relation::Member.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: party_members_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
