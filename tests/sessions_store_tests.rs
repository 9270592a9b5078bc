// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store behavior: last session and the weekly histogram.

use std::sync::Arc;

use chrono::{Duration, Utc};
use powder_tracker::models::SessionPatch;
use powder_tracker::storage::{namespaces, BlobStore, MemoryStorage};
use powder_tracker::time_utils::day_string;
use powder_tracker::AppStores;

mod common;
use common::{make_session, memory_stores};

/// Stores with an empty persisted session list, so fixture sessions do not
/// leak into date-window assertions.
async fn empty_session_stores() -> AppStores {
    let storage = MemoryStorage::new();
    storage
        .set(namespaces::SESSIONS, "[]")
        .await
        .expect("Seed write should succeed");
    AppStores::load(Arc::new(storage)).await
}

#[tokio::test]
async fn test_last_session_over_fixture_data() {
    let (stores, _storage) = memory_stores().await;

    let last = stores.sessions.last_session().expect("Sessions exist");
    assert_eq!(last.id, "5");
    assert_eq!(last.date, "2025-01-16");
}

#[tokio::test]
async fn test_last_session_empty_returns_none() {
    let stores = empty_session_stores().await;
    assert!(stores.sessions.last_session().is_none());
}

#[tokio::test]
async fn test_weekly_histogram_counts_today_and_three_days_back() {
    let stores = empty_session_stores().await;
    let now = Utc::now();

    let today = day_string(now);
    let three_days_back = day_string(now - Duration::days(3));

    stores
        .sessions
        .add(make_session("t", &today))
        .wait()
        .await
        .expect("Write should succeed");
    stores
        .sessions
        .add(make_session("b", &three_days_back))
        .wait()
        .await
        .expect("Write should succeed");

    let histogram = stores.sessions.weekly_histogram(now);

    assert_eq!(histogram.len(), 7);
    let total: u32 = histogram.iter().map(|bucket| bucket.count).sum();
    assert_eq!(total, 2);
    assert_eq!(
        histogram.iter().find(|b| b.date == today).map(|b| b.count),
        Some(1)
    );
    assert_eq!(
        histogram
            .iter()
            .find(|b| b.date == three_days_back)
            .map(|b| b.count),
        Some(1)
    );

    // Ascending, ending today
    assert_eq!(histogram.last().expect("7 buckets").date, today);
    let dates: Vec<&str> = histogram.iter().map(|b| b.date.as_str()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_weekly_histogram_ignores_old_sessions() {
    let stores = empty_session_stores().await;
    let now = Utc::now();

    stores
        .sessions
        .add(make_session("old", &day_string(now - Duration::days(30))))
        .wait()
        .await
        .expect("Write should succeed");

    let histogram = stores.sessions.weekly_histogram(now);
    let total: u32 = histogram.iter().map(|bucket| bucket.count).sum();
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_update_feedback_after_recording() {
    let (stores, _storage) = memory_stores().await;

    stores
        .sessions
        .update(
            "2",
            SessionPatch {
                feedback: Some("Carve earlier into the fall line.".to_string()),
                ..SessionPatch::default()
            },
        )
        .wait()
        .await
        .expect("Write should succeed");

    let session = stores.sessions.get("2").expect("Session 2 exists");
    assert_eq!(
        session.feedback.as_deref(),
        Some("Carve earlier into the fall line.")
    );
    // Metrics untouched
    assert_eq!(session.distance_km, 42.3);
}

#[tokio::test]
async fn test_remove_session() {
    let (stores, _storage) = memory_stores().await;

    stores
        .sessions
        .remove("3")
        .wait()
        .await
        .expect("Write should succeed");

    assert!(stores.sessions.get("3").is_none());
    assert_eq!(stores.sessions.sessions().len(), 4);
}
