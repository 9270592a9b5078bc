// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Powder-Tracker: local-first state layer for a ski/snowboard companion app.
//!
//! This crate owns the app's persisted client-side state: the user profile,
//! planned trips, recorded sessions, and the packing checklist, plus the
//! read-only resort catalog. Screens read and mutate through the store
//! handles in [`AppStores`] and re-render on change notifications; every
//! mutation writes the owning store's full snapshot back to the configured
//! blob store.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod storage;
pub mod stores;
pub mod time_utils;

use std::sync::Arc;

use storage::BlobStore;
use stores::{ChecklistStore, ResortDirectory, SessionStore, TripStore, UserStore};

/// All application stores, hydrated and ready for injection into the UI
/// layer. One instance per process; no global state.
pub struct AppStores {
    pub resorts: ResortDirectory,
    pub user: UserStore,
    pub trips: TripStore,
    pub sessions: SessionStore,
    pub checklist: ChecklistStore,
}

impl AppStores {
    /// Hydrate every persisted store from `storage` and build the resort
    /// directory from the bundled catalog.
    pub async fn load(storage: Arc<dyn BlobStore>) -> Self {
        let (user, trips, sessions, checklist) = tokio::join!(
            UserStore::load(Arc::clone(&storage)),
            TripStore::load(Arc::clone(&storage)),
            SessionStore::load(Arc::clone(&storage)),
            ChecklistStore::load(Arc::clone(&storage)),
        );

        tracing::info!("Application stores hydrated");

        Self {
            resorts: ResortDirectory::with_default_catalog(),
            user,
            trips,
            sessions,
            checklist,
        }
    }
}
