// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Packing checklist store.

use std::sync::Arc;

use tokio::sync::watch;

use crate::fixtures;
use crate::models::{checklist, Category, ChecklistItem, ChecklistItemPatch};
use crate::storage::{namespaces, BlobStore};
use crate::stores::{Persisted, WriteHandle};

/// User-managed packing checklist.
pub struct ChecklistStore {
    inner: Persisted<Vec<ChecklistItem>>,
}

impl ChecklistStore {
    /// Hydrate from storage, defaulting to the fixture checklist.
    pub async fn load(storage: Arc<dyn BlobStore>) -> Self {
        Self {
            inner: Persisted::load(
                namespaces::CHECKLIST,
                storage,
                fixtures::default_checklist(),
            )
            .await,
        }
    }

    pub fn items(&self) -> Vec<ChecklistItem> {
        self.inner.snapshot()
    }

    pub fn add(&self, item: ChecklistItem) -> WriteHandle {
        self.inner.mutate(move |items| {
            let mut next = items.clone();
            next.push(item);
            next
        })
    }

    pub fn remove(&self, id: &str) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |items| {
            items.iter().filter(|item| item.id != id).cloned().collect()
        })
    }

    /// Flip `completed` for the item with a matching id; a no-op when the id
    /// is unknown.
    pub fn toggle(&self, id: &str) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |items| {
            items
                .iter()
                .map(|item| {
                    if item.id == id {
                        ChecklistItem {
                            completed: !item.completed,
                            ..item.clone()
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect()
        })
    }

    pub fn update(&self, id: &str, patch: ChecklistItemPatch) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |items| {
            items
                .iter()
                .map(|item| {
                    if item.id == id {
                        item.merged(&patch)
                    } else {
                        item.clone()
                    }
                })
                .collect()
        })
    }

    /// Packed percentage in [0, 100]; 0 for an empty checklist.
    pub fn completion_percentage(&self) -> u32 {
        self.inner
            .read(|items| checklist::completion_percentage(items))
    }

    /// Items partitioned by category, groups in first-seen order.
    pub fn grouped(&self) -> Vec<(Category, Vec<ChecklistItem>)> {
        self.inner.read(|items| checklist::group_by_category(items))
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.subscribe()
    }
}
