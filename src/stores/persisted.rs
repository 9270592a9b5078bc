// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic persisted store container.
//!
//! Wraps an in-memory state value with:
//! - hydration from a blob store at load time, falling back to a default on
//!   a missing or unparseable snapshot
//! - immutable-update mutation: each mutator computes a replacement value
//!   from the current one and swaps it in
//! - a revision counter published on a watch channel for screen re-renders
//! - one spawned write-back task per mutation; the caller may await its
//!   [`WriteHandle`] or drop it for fire-and-forget

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{Result, StoreError};
use crate::storage::BlobStore;

/// In-memory state plus its persistence namespace.
pub struct Persisted<T> {
    namespace: &'static str,
    storage: Arc<dyn BlobStore>,
    state: RwLock<T>,
    revision: watch::Sender<u64>,
}

/// Handle to the write-back task spawned by a mutation.
///
/// Dropping it detaches the write (the original app never observed write
/// results); awaiting [`WriteHandle::wait`] surfaces the outcome.
pub struct WriteHandle {
    task: JoinHandle<Result<()>>,
}

impl WriteHandle {
    /// Wait for the write-back to finish and return its result.
    pub async fn wait(self) -> Result<()> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(StoreError::Task(e.to_string())),
        }
    }
}

impl<T> Persisted<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Hydrate a store from its persisted snapshot, or fall back to
    /// `default`. Never fails: a bad snapshot is discarded with a warning.
    pub async fn load(
        namespace: &'static str,
        storage: Arc<dyn BlobStore>,
        default: T,
    ) -> Self {
        let state = match storage.get(namespace).await {
            Ok(Some(blob)) => match serde_json::from_str::<T>(&blob) {
                Ok(state) => {
                    tracing::debug!(namespace, "Hydrated store from persisted snapshot");
                    state
                }
                Err(e) => {
                    tracing::warn!(
                        namespace,
                        error = %e,
                        "Discarding unparseable snapshot, using defaults"
                    );
                    default
                }
            },
            Ok(None) => {
                tracing::debug!(namespace, "No persisted snapshot, using defaults");
                default
            }
            Err(e) => {
                tracing::warn!(
                    namespace,
                    error = %e,
                    "Failed to read persisted snapshot, using defaults"
                );
                default
            }
        };

        let (revision, _) = watch::channel(0);
        Self {
            namespace,
            storage,
            state: RwLock::new(state),
            revision,
        }
    }

    /// Run a read-only function over the current state. Synchronous, no I/O.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let state = self.state.read().expect("state lock poisoned");
        f(&*state)
    }

    /// Clone the current state.
    pub fn snapshot(&self) -> T {
        self.read(T::clone)
    }

    /// Replace the state with `f(current)`, bump the revision, and spawn a
    /// write-back of the full snapshot.
    pub fn mutate(&self, f: impl FnOnce(&T) -> T) -> WriteHandle {
        let snapshot = {
            let mut state = self.state.write().expect("state lock poisoned");
            let next = f(&*state);
            *state = next;
            state.clone()
        };
        self.revision.send_modify(|revision| *revision += 1);
        self.persist(snapshot)
    }

    /// Subscribe to change notifications. The receiver yields the revision
    /// counter; any observed change means the state was replaced.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    fn persist(&self, snapshot: T) -> WriteHandle {
        let namespace = self.namespace;
        let storage = Arc::clone(&self.storage);

        let task = tokio::spawn(async move {
            let result: Result<()> = async {
                let payload = serde_json::to_string(&snapshot)?;
                storage.set(namespace, &payload).await?;
                Ok(())
            }
            .await;

            if let Err(e) = &result {
                tracing::warn!(namespace, error = %e, "Persistence write failed");
            }
            result
        });

        WriteHandle { task }
    }
}
