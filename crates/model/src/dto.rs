//! # Outward Data Transfer Objects
//!
//! Serialized shapes handed to clients. Each type lists exactly the fields
//! that leave the process; records are never serialized directly.

use entity::{members, parties};
use error::{AppError, Result};
use serde::Serialize;

use crate::{authority::Authority, party_member::PartyMember, store::MemberStore};

/// Public view of a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    /// Member's unique identifier
    pub id:       i64,
    /// Login name
    pub username: String,
}

impl From<&members::Model> for MemberResponse {
    fn from(member: &members::Model) -> Self {
        Self {
            id:       member.id,
            username: member.username.clone(),
        }
    }
}

/// Public view of a party
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyResponse {
    /// Party's unique identifier
    pub id:   i64,
    /// Party name
    pub name: String,
}

impl From<&parties::Model> for PartyResponse {
    fn from(party: &parties::Model) -> Self {
        Self {
            id:   party.id,
            name: party.name.clone(),
        }
    }
}

/// Response for a party membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyMemberResponse {
    /// Membership record ID, null before insert
    pub id:              Option<i64>,
    /// The party joined
    pub party:           PartyResponse,
    /// The joining member
    pub member:          MemberResponse,
    /// Whether the member leads the party
    #[serde(rename = "partyLeader")]
    pub is_party_leader: bool,
    /// Whether the member has elevated status in the party
    #[serde(rename = "specialUser")]
    pub is_special_user: bool,
}

impl TryFrom<&PartyMember> for PartyMemberResponse {
    type Error = AppError;

    fn try_from(record: &PartyMember) -> Result<Self> {
        let party = record
            .party()
            .ok_or_else(|| AppError::validation("party member has no party"))?;
        let member = record
            .member()
            .ok_or_else(|| AppError::validation("party member has no member"))?;

        Ok(Self {
            id:              record.id(),
            party:           party.into(),
            member:          member.into(),
            is_party_leader: record.is_party_leader(),
            is_special_user: record.is_special_user(),
        })
    }
}

/// Response for an authority. The storage id is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorityResponse {
    /// Role label
    pub name: Option<String>,
    /// Owning member, null when the authority has none
    pub user: Option<MemberResponse>,
}

impl AuthorityResponse {
    /// Build the response, resolving the lazy user through `store` if needed.
    pub async fn resolve<S>(authority: &Authority, store: &S) -> Result<Self>
    where
        S: MemberStore + ?Sized,
    {
        let user = authority.user().load(store).await?;
        Ok(Self {
            name: authority.name().clone(),
            user: user.map(MemberResponse::from),
        })
    }
}
