//! User profile store.

use std::sync::Arc;

use tokio::sync::watch;

use crate::fixtures;
use crate::models::{SkillLevel, User};
use crate::storage::{namespaces, BlobStore};
use crate::stores::{Persisted, WriteHandle};

/// Holds the single active user profile.
///
/// Setting a whole profile always succeeds; the field updaters are guarded
/// no-ops when no profile exists.
pub struct UserStore {
    inner: Persisted<Option<User>>,
}

impl UserStore {
    /// Hydrate from storage, defaulting to the first-launch profile.
    pub async fn load(storage: Arc<dyn BlobStore>) -> Self {
        Self {
            inner: Persisted::load(namespaces::USER, storage, Some(fixtures::default_user()))
                .await,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.inner.snapshot()
    }

    /// Replace the whole profile.
    pub fn set_user(&self, user: User) -> WriteHandle {
        self.inner.mutate(move |_| Some(user))
    }

    pub fn update_name(&self, name: &str) -> WriteHandle {
        let name = name.to_string();
        self.inner.mutate(move |user| {
            user.as_ref().map(|current| User {
                name,
                ..current.clone()
            })
        })
    }

    pub fn update_level(&self, level: SkillLevel) -> WriteHandle {
        self.inner.mutate(move |user| {
            user.as_ref().map(|current| User {
                level,
                ..current.clone()
            })
        })
    }

    pub fn update_preferred_resort(&self, resort_id: &str) -> WriteHandle {
        let resort_id = resort_id.to_string();
        self.inner.mutate(move |user| {
            user.as_ref().map(|current| User {
                preferred_resort_id: Some(resort_id),
                ..current.clone()
            })
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.subscribe()
    }
}
