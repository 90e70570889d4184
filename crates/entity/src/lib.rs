//! Entity definitions for Signiel
//!
//! This crate contains Sea-ORM entity definitions for the database models.
//! Entities are auto-generated from the database schema.

pub mod authorities;
pub use authorities::Entity as Authorities;
pub mod members;
pub use members::Entity as Members;
pub mod parties;
pub use parties::Entity as Parties;
pub mod party_members;
pub use party_members::Entity as PartyMembers;
