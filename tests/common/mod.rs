// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;

use powder_tracker::models::{Category, ChecklistItem, Session, Trip};
use powder_tracker::storage::MemoryStorage;
use powder_tracker::AppStores;

/// Build app stores over a fresh in-memory backend. Returns the backend too
/// so tests can inspect or pre-seed blobs.
#[allow(dead_code)]
pub async fn memory_stores() -> (AppStores, MemoryStorage) {
    let storage = MemoryStorage::new();
    let stores = AppStores::load(Arc::new(storage.clone())).await;
    (stores, storage)
}

#[allow(dead_code)]
pub fn make_trip(id: &str, resort_id: &str, date: &str) -> Trip {
    Trip {
        id: id.to_string(),
        resort_id: resort_id.to_string(),
        date: date.to_string(),
        duration_days: 2,
    }
}

#[allow(dead_code)]
pub fn make_session(id: &str, date: &str) -> Session {
    Session {
        id: id.to_string(),
        date: date.to_string(),
        resort_id: "1".to_string(),
        duration_minutes: 210,
        distance_km: 25.4,
        max_speed_kmh: 55.0,
        feedback: None,
    }
}

#[allow(dead_code)]
pub fn make_item(id: &str, title: &str, completed: bool, category: Category) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        title: title.to_string(),
        completed,
        category,
    }
}
