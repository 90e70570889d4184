//! # Authority Record
//!
//! A named permission or role granted to one member. The member is held as a
//! [`LazyMember`] and only fetched when explicitly loaded.
//!
//! Three construction paths reach the same state: [`Authority::default`],
//! [`Authority::new`] and [`AuthorityBuilder`].

use derive_getters::Getters;
use entity::{authorities, members};
use sea_orm::{ActiveValue::NotSet, Set};

use crate::lazy::LazyMember;

/// Permission or role granted to a member.
///
/// Fields are read-only apart from [`Authority::set_user`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(default)]
pub struct Authority {
    /// Storage-assigned identifier, unset until inserted.
    #[builder(setter(into, strip_option))]
    id: Option<i64>,

    /// Role label, e.g. `ROLE_ADMIN`.
    #[builder(setter(into, strip_option))]
    name: Option<String>,

    /// Owning member, resolved on demand.
    #[builder(setter(custom))]
    user: LazyMember,
}

impl AuthorityBuilder {
    /// Associate the authority with an already loaded member.
    pub fn user(&mut self, member: members::Model) -> &mut Self {
        self.user = Some(LazyMember::loaded(member));
        self
    }

    /// Associate the authority with a member known only by id.
    pub fn user_id(&mut self, member_id: i64) -> &mut Self {
        self.user = Some(LazyMember::unloaded(member_id));
        self
    }
}

impl Authority {
    /// Construct an authority with every field supplied.
    #[must_use]
    pub fn new(id: Option<i64>, name: Option<String>, user: impl Into<LazyMember>) -> Self {
        Self {
            id,
            name,
            user: user.into(),
        }
    }

    /// Replace the associated member. `id` and `name` are left untouched.
    pub fn set_user(&mut self, user: members::Model) { self.user = LazyMember::loaded(user); }

    /// Active model for this authority.
    ///
    /// The id is left unset when the authority has not been stored yet.
    pub fn to_active_model(&self) -> authorities::ActiveModel {
        authorities::ActiveModel {
            id:        self.id.map(Set).unwrap_or(NotSet),
            name:      Set(self.name.clone()),
            member_id: Set(self.user.id()),
        }
    }
}

impl From<authorities::Model> for Authority {
    fn from(row: authorities::Model) -> Self {
        Self {
            id:   Some(row.id),
            name: row.name,
            user: row.member_id.map(LazyMember::unloaded).unwrap_or_default(),
        }
    }
}
