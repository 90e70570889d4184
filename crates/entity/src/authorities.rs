//! Authorities Entity
//!
//! Named permission or role granted to a single member.
//!
//! The owning member is stored in a column literally called `member`; the
//! field is named `member_id` on the Rust side to keep it distinct from the
//! related entity.
//!
//! CUSTOMIZATION REGION START: authorities_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "authority")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:        i64,
    pub name:      Option<String>,
    #[sea_orm(column_name = "member")]
    pub member_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::members::Entity",
        from = "Column::MemberId",
        to = "super::members::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef { Relation::Member.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: authorities_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
