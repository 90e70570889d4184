//! # Signiel Records
//!
//! Domain records for party membership and member authorities, layered over
//! the Sea-ORM entities in the `entity` crate.
//!
//! ## Modules
//!
//! - [`party_member`]: the party/member join record
//! - [`authority`]: named permission granted to a member, with its builder
//! - [`lazy`]: deferred member reference resolved through a [`MemberStore`]
//! - [`store`]: the member lookup seam
//! - [`dto`]: outward serialized shapes
//! - [`repository`]: persistence of the records through Sea-ORM

pub mod authority;
pub mod dto;
pub mod lazy;
pub mod party_member;
pub mod repository;
pub mod store;

pub use authority::{Authority, AuthorityBuilder, AuthorityBuilderError};
pub use lazy::LazyMember;
pub use party_member::PartyMember;
pub use store::MemberStore;
