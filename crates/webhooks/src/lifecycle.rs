//! Lifecycle state of an observed entity and the topic derived from it.

use serde::{Deserialize, Serialize};

use storehook_core::Entity;

pub const CREATED_SUFFIX: &str = "_create";
pub const UPDATED_SUFFIX: &str = "_update";
pub const DELETED_SUFFIX: &str = "_delete";

/// Transition an entity went through when it was observed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Created,
    Updated,
    Deleted,
}

impl LifecycleState {
    /// Deleted wins over new; anything else is an update.
    pub fn from_flags(is_new: bool, is_deleted: bool) -> Self {
        if is_deleted {
            LifecycleState::Deleted
        } else if is_new {
            LifecycleState::Created
        } else {
            LifecycleState::Updated
        }
    }

    /// Snapshot the state of `entity` once, at observation time.
    pub fn of<E>(entity: &E) -> Self
    where
        E: LifecycleEntity + ?Sized,
    {
        Self::from_flags(entity.is_object_new(), entity.is_deleted())
    }

    pub fn suffix(self) -> &'static str {
        match self {
            LifecycleState::Created => CREATED_SUFFIX,
            LifecycleState::Updated => UPDATED_SUFFIX,
            LifecycleState::Deleted => DELETED_SUFFIX,
        }
    }
}

/// Host-platform entity whose save/delete triggers a webhook.
pub trait LifecycleEntity: Entity<Id = i64> {
    fn is_object_new(&self) -> bool;

    fn is_deleted(&self) -> bool;

    /// Topic namespace, e.g. `catalog_category`.
    fn event_prefix(&self) -> &str;
}

pub fn build_topic(prefix: &str, state: LifecycleState) -> String {
    format!("{prefix}{}", state.suffix())
}
