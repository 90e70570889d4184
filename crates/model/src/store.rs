//! # Member Store
//!
//! Lookup seam used to resolve lazy member references.

use std::time::Instant;

use async_trait::async_trait;
use entity::{members, Members};
use error::Result;
use logging::log_db_query;
use sea_orm::{DatabaseConnection, EntityTrait};

/// Source of member rows for deferred references.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Fetch a member by id, `None` when no such row exists.
    async fn find_member(&self, id: i64) -> Result<Option<members::Model>>;
}

#[async_trait]
impl MemberStore for DatabaseConnection {
    async fn find_member(&self, id: i64) -> Result<Option<members::Model>> {
        let start = Instant::now();
        let member = Members::find_by_id(id).one(self).await?;
        log_db_query!("select", "member", start.elapsed().as_millis());
        Ok(member)
    }
}
