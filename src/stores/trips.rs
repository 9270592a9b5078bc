// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trip store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::fixtures;
use crate::models::{trip, Trip, TripPatch};
use crate::storage::{namespaces, BlobStore};
use crate::stores::{Persisted, WriteHandle};

/// User-created trips plus the next-upcoming-trip derivation.
pub struct TripStore {
    inner: Persisted<Vec<Trip>>,
}

impl TripStore {
    /// Hydrate from storage, defaulting to the fixture trips.
    pub async fn load(storage: Arc<dyn BlobStore>) -> Self {
        Self {
            inner: Persisted::load(namespaces::TRIPS, storage, fixtures::default_trips()).await,
        }
    }

    pub fn trips(&self) -> Vec<Trip> {
        self.inner.snapshot()
    }

    /// Look up a trip by id (route-parameter resolution).
    pub fn get(&self, id: &str) -> Option<Trip> {
        self.inner
            .read(|trips| trips.iter().find(|trip| trip.id == id).cloned())
    }

    pub fn add(&self, trip: Trip) -> WriteHandle {
        self.inner.mutate(move |trips| {
            let mut next = trips.clone();
            next.push(trip);
            next
        })
    }

    pub fn remove(&self, id: &str) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |trips| {
            trips
                .iter()
                .filter(|trip| trip.id != id)
                .cloned()
                .collect()
        })
    }

    pub fn update(&self, id: &str, patch: TripPatch) -> WriteHandle {
        let id = id.to_string();
        self.inner.mutate(move |trips| {
            trips
                .iter()
                .map(|trip| {
                    if trip.id == id {
                        trip.merged(&patch)
                    } else {
                        trip.clone()
                    }
                })
                .collect()
        })
    }

    /// The trip with the earliest date strictly after `now`, if any.
    pub fn next_trip(&self, now: DateTime<Utc>) -> Option<Trip> {
        self.inner
            .read(|trips| trip::next_upcoming(trips, now).cloned())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.inner.subscribe()
    }
}
