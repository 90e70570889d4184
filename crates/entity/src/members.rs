//! Members Entity
//!
//! Application users. Only the columns the membership and authority tables
//! rely on are mapped here.
//!
//! CUSTOMIZATION REGION START: member_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id:         i64,
    pub username:   String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::party_members::Entity")]
    PartyMembers,
    #[sea_orm(has_many = "super::authorities::Entity")]
    Authorities,
}

impl Related<super::party_members::Entity> for Entity {
    fn to() -> RelationDef { Relation::PartyMembers.def() }
}

impl Related<super::authorities::Entity> for Entity {
    fn to() -> RelationDef { Relation::Authorities.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: member_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
