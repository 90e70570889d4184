//! # Record Construction Tests
//!
//! Accessors, construction paths and equality of the party member and
//! authority records.

mod common;

use common::{member, party};
use model::{Authority, AuthorityBuilder, LazyMember, PartyMember};

#[cfg(test)]
mod party_member_tests {
    use super::*;

    #[test]
    fn test_default_party_member_is_empty() {
        let record = PartyMember::default();
        assert_eq!(record.id(), None);
        assert!(record.party().is_none());
        assert!(record.member().is_none());
        assert!(!record.is_party_leader());
        assert!(!record.is_special_user());
    }

    #[test]
    fn test_party_member_fields_round_trip() {
        let mut record = PartyMember::default();
        record.set_id(Some(11));
        record.set_party(Some(party(1, "weekend")));
        record.set_member(Some(member(2, "alice")));
        record.set_party_leader(true);
        record.set_special_user(true);

        assert_eq!(record.id(), Some(11));
        assert_eq!(record.party(), Some(&party(1, "weekend")));
        assert_eq!(record.member(), Some(&member(2, "alice")));
        assert!(record.is_party_leader());
        assert!(record.is_special_user());
        assert_eq!(record.party_id(), Some(1));
        assert_eq!(record.member_id(), Some(2));
    }

    #[test]
    fn test_party_member_flags_clear_again() {
        let mut record = PartyMember::default();
        record.set_party_leader(true);
        record.set_party_leader(false);
        record.set_special_user(true);
        record.set_special_user(false);
        assert_eq!(record, PartyMember::default());
    }

    #[test]
    fn test_party_member_equality_uses_all_fields() {
        let mut a = PartyMember::default();
        a.set_party(Some(party(1, "weekend")));
        a.set_member(Some(member(2, "alice")));
        let mut b = a.clone();
        assert_eq!(a, b);

        b.set_special_user(true);
        assert_ne!(a, b);

        a.set_special_user(true);
        a.set_member(Some(member(3, "bob")));
        assert_ne!(a, b);
    }
}

#[cfg(test)]
mod authority_tests {
    use super::*;

    #[test]
    fn test_default_authority_is_unset() {
        let authority = Authority::default();
        assert_eq!(authority.id(), &None);
        assert_eq!(authority.name(), &None);
        assert!(authority.user().is_unset());
    }

    #[test]
    fn test_full_argument_construction() {
        let m = member(5, "carol");
        let authority = Authority::new(Some(1), Some("ADMIN".to_string()), m.clone());

        assert_eq!(authority.id(), &Some(1));
        assert_eq!(authority.name().as_deref(), Some("ADMIN"));
        assert_eq!(authority.user().get(), Some(&m));
    }

    #[test]
    fn test_builder_matches_full_argument_path() {
        let m = member(5, "carol");
        let built = AuthorityBuilder::default()
            .user(m.clone())
            .name("ADMIN")
            .build()
            .unwrap();

        assert_eq!(built, Authority::new(None, Some("ADMIN".to_string()), m.clone()));
        assert_eq!(built.id(), &None);
        assert_eq!(built.user().get(), Some(&m));
    }

    #[test]
    fn test_builder_matches_default_then_set_user() {
        let m = member(5, "carol");
        let built = AuthorityBuilder::default().user(m.clone()).build().unwrap();

        let mut assembled = Authority::default();
        assembled.set_user(m);
        assert_eq!(built, assembled);
    }

    #[test]
    fn test_empty_builder_equals_default() {
        let built = AuthorityBuilder::default().build().unwrap();
        assert_eq!(built, Authority::default());
    }

    #[test]
    fn test_builder_with_id() {
        let built = AuthorityBuilder::default()
            .id(9)
            .name("ROLE_USER")
            .user_id(4)
            .build()
            .unwrap();
        assert_eq!(built.id(), &Some(9));
        assert_eq!(built.user(), &LazyMember::unloaded(4));
    }

    #[test]
    fn test_set_user_replaces_member_only() {
        let mut authority = Authority::new(Some(1), Some("ADMIN".to_string()), member(5, "carol"));
        authority.set_user(member(6, "dave"));

        assert_eq!(authority.id(), &Some(1));
        assert_eq!(authority.name().as_deref(), Some("ADMIN"));
        assert_eq!(authority.user().id(), Some(6));
        assert_eq!(
            authority.user().get().map(|m| m.username.as_str()),
            Some("dave")
        );
    }
}
