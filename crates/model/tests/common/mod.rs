//! # Common Test Utilities
//!
//! Fixtures and an in-memory member store shared by the record tests.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Once,
    },
};

use async_trait::async_trait;
use entity::{members, parties, party_members};
use error::Result;
use model::MemberStore;

static INIT: Once = Once::new();

/// Initialize test logging (run once per test binary)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

fn epoch() -> chrono::DateTime<chrono::Utc> { chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap() }

pub fn member(id: i64, username: &str) -> members::Model {
    members::Model {
        id,
        username: username.to_string(),
        created_at: epoch(),
    }
}

pub fn party(id: i64, name: &str) -> parties::Model {
    parties::Model {
        id,
        name: name.to_string(),
        created_at: epoch(),
    }
}

pub fn party_member_row(id: i64, party_id: i64, member_id: i64, leader: bool) -> party_members::Model {
    party_members::Model {
        id,
        party_id,
        member_id,
        is_party_leader: leader,
        is_special_user: false,
    }
}

/// Member store backed by a map that counts every fetch
#[derive(Default)]
pub struct CountingStore {
    members: HashMap<i64, members::Model>,
    fetches: AtomicUsize,
}

impl CountingStore {
    pub fn with_members(members: impl IntoIterator<Item = members::Model>) -> Self {
        Self {
            members: members.into_iter().map(|m| (m.id, m)).collect(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize { self.fetches.load(Ordering::SeqCst) }
}

#[async_trait]
impl MemberStore for CountingStore {
    async fn find_member(&self, id: i64) -> Result<Option<members::Model>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.members.get(&id).cloned())
    }
}
