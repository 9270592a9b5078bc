// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Session store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::fixtures;
use crate::models::{session, stats, DayCount, Session, SessionPatch};
use crate::storage::{namespaces, BlobStore};
use crate::stores::{Persisted, WriteHandle};

/// Recorded sessions plus the most-recent and weekly-histogram derivations.
pub struct SessionStore {
    inner: Persisted<Vec<Session>>,
}

impl SessionStore {
    /// Hydrate from storage, defaulting to the fixture sessions.
    pub async fn load(storage: Arc<dyn BlobStore>) -> Self {
        Self {
            inner: Persisted::load(
                namespaces::SESSIONS,
                storage,
                fixtures::default_sessions(),
            )
            .await,
        }
    }

    pub fn sessions(&self) -> Vec<Session> {
        self.inner.snapshot()
    }

    /// Look up a session by id (route-parameter resolution).
    pub fn get(&self, id: &str) -> Option<Session> {
        self.inner
            .read(|sessions| sessions.iter().find(|session| session.id == id).cloned())
    }

    pub fn add(&self, session: Session) -> WriteHandle {
        self.inner.mutate(move |sessions| {
            let mut next = sessions.clone();
            next.push(session);
            next
        })
    }

    pub fn remove(&self, id: &str) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |sessions| {
            sessions
                .iter()
                .filter(|session| session.id != id)
                .cloned()
                .collect()
        })
    }

    pub fn update(&self, id: &str, patch: SessionPatch) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |sessions| {
            sessions
                .iter()
                .map(|session| {
                    if session.id == id {
                        session.merged(&patch)
                    } else {
                        session.clone()
                    }
                })
                .collect()
        })
    }

    /// The session with the latest date, if any.
    pub fn last_session(&self) -> Option<Session> {
        self.inner
            .read(|sessions| session::most_recent(sessions).cloned())
    }

    /// Sessions per day over the trailing week ending at `now`.
    pub fn weekly_histogram(&self, now: DateTime<Utc>) -> Vec<DayCount> {
        self.inner
            .read(|sessions| stats::weekly_histogram(sessions, now))
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.subscribe()
    }
}
