//! # Lazy Member Reference
//!
//! A member reference that holds only the foreign key until it is asked for
//! the member itself. The first successful resolution is cached for the
//! lifetime of the handle; later calls never reach the store.

use entity::members;
use error::{AppError, Result};
use logging::log_lazy_load;
use tokio::sync::OnceCell;

use crate::store::MemberStore;

/// Deferred reference to a [`members::Model`].
///
/// Two handles are equal when they point at the same member id, whether or
/// not either of them has been resolved.
#[derive(Debug, Clone, Default)]
pub struct LazyMember {
    id:       Option<i64>,
    resolved: OnceCell<members::Model>,
}

impl LazyMember {
    /// A handle that references no member.
    #[must_use]
    pub fn unset() -> Self { Self::default() }

    /// A handle that knows only the member id; the row is fetched on first load.
    #[must_use]
    pub fn unloaded(id: i64) -> Self {
        Self {
            id:       Some(id),
            resolved: OnceCell::new(),
        }
    }

    /// A handle already holding its member.
    #[must_use]
    pub fn loaded(member: members::Model) -> Self {
        Self {
            id:       Some(member.id),
            resolved: OnceCell::new_with(Some(member)),
        }
    }

    /// The referenced member id. Never triggers a fetch.
    pub fn id(&self) -> Option<i64> { self.id }

    /// True when no member is referenced.
    pub fn is_unset(&self) -> bool { self.id.is_none() }

    /// True when the member has been resolved and cached.
    pub fn is_loaded(&self) -> bool { self.resolved.initialized() }

    /// The cached member, if already resolved. Never triggers a fetch.
    pub fn get(&self) -> Option<&members::Model> { self.resolved.get() }

    /// Resolve the member, fetching it from `store` on first access.
    ///
    /// Returns `Ok(None)` for an unset handle and `NotFound` when the id
    /// refers to no member row.
    pub async fn load<S>(&self, store: &S) -> Result<Option<&members::Model>>
    where
        S: MemberStore + ?Sized,
    {
        let Some(id) = self.id
        else {
            return Ok(None);
        };

        if let Some(member) = self.resolved.get() {
            log_lazy_load!("member", id, true);
            return Ok(Some(member));
        }

        // Another caller may win the race and resolve the member first
        let mut fetched = false;
        let member = self
            .resolved
            .get_or_try_init(|| {
                fetched = true;
                async move {
                    store
                        .find_member(id)
                        .await?
                        .ok_or_else(|| AppError::not_found(format!("Member {}", id)))
                }
            })
            .await?;
        log_lazy_load!("member", id, !fetched);
        Ok(Some(member))
    }
}

impl PartialEq for LazyMember {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for LazyMember {}

impl From<members::Model> for LazyMember {
    fn from(member: members::Model) -> Self { Self::loaded(member) }
}

impl From<Option<members::Model>> for LazyMember {
    fn from(member: Option<members::Model>) -> Self { member.map(Self::loaded).unwrap_or_default() }
}
