//! # Party Member Record
//!
//! Links one party and one member. Both references are eager: a record read
//! back from storage carries the full party and member rows.

use entity::{members, parties, party_members};
use error::{AppError, Result};
use sea_orm::{ActiveValue::NotSet, Set};

/// Membership of a member in a party.
///
/// A default record has no id, no references and both flags cleared. The id
/// is assigned by storage on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyMember {
    id:              Option<i64>,
    party:           Option<parties::Model>,
    member:          Option<members::Model>,
    is_party_leader: bool,
    is_special_user: bool,
}

impl PartyMember {
    /// Assemble a record from a stored row and its eagerly loaded references.
    #[must_use]
    pub fn from_parts(row: party_members::Model, party: parties::Model, member: members::Model) -> Self {
        Self {
            id:              Some(row.id),
            party:           Some(party),
            member:          Some(member),
            is_party_leader: row.is_party_leader,
            is_special_user: row.is_special_user,
        }
    }

    pub fn id(&self) -> Option<i64> { self.id }

    pub fn set_id(&mut self, id: Option<i64>) { self.id = id; }

    pub fn party(&self) -> Option<&parties::Model> { self.party.as_ref() }

    pub fn set_party(&mut self, party: Option<parties::Model>) { self.party = party; }

    pub fn member(&self) -> Option<&members::Model> { self.member.as_ref() }

    pub fn set_member(&mut self, member: Option<members::Model>) { self.member = member; }

    pub fn is_party_leader(&self) -> bool { self.is_party_leader }

    pub fn set_party_leader(&mut self, is_party_leader: bool) { self.is_party_leader = is_party_leader; }

    pub fn is_special_user(&self) -> bool { self.is_special_user }

    pub fn set_special_user(&mut self, is_special_user: bool) { self.is_special_user = is_special_user; }

    /// Id of the referenced party, if any.
    pub fn party_id(&self) -> Option<i64> { self.party.as_ref().map(|p| p.id) }

    /// Id of the referenced member, if any.
    pub fn member_id(&self) -> Option<i64> { self.member.as_ref().map(|m| m.id) }

    /// Active model carrying every column of this record.
    ///
    /// The id is left unset when the record has not been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when the party or member reference is missing.
    pub fn to_active_model(&self) -> Result<party_members::ActiveModel> {
        let party_id = self
            .party_id()
            .ok_or_else(|| AppError::validation("party member has no party"))?;
        let member_id = self
            .member_id()
            .ok_or_else(|| AppError::validation("party member has no member"))?;

        Ok(party_members::ActiveModel {
            id:              self.id.map(Set).unwrap_or(NotSet),
            party_id:        Set(party_id),
            member_id:       Set(member_id),
            is_party_leader: Set(self.is_party_leader),
            is_special_user: Set(self.is_special_user),
        })
    }
}
