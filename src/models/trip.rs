// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Planned trip model and upcoming-trip derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::parse_flexible;

/// A planned trip to a resort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    /// Resort reference; resolved by id lookup, not checked on write
    pub resort_id: String,
    /// Start date/time (ISO 8601)
    pub date: String,
    /// Trip length in days
    #[serde(rename = "duration")]
    pub duration_days: u32,
}

/// Partial update for a trip; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct TripPatch {
    pub resort_id: Option<String>,
    pub date: Option<String>,
    pub duration_days: Option<u32>,
}

impl Trip {
    /// Apply a patch, producing the updated record.
    pub fn merged(&self, patch: &TripPatch) -> Trip {
        Trip {
            id: self.id.clone(),
            resort_id: patch
                .resort_id
                .clone()
                .unwrap_or_else(|| self.resort_id.clone()),
            date: patch.date.clone().unwrap_or_else(|| self.date.clone()),
            duration_days: patch.duration_days.unwrap_or(self.duration_days),
        }
    }
}

/// The next trip strictly after `now`, earliest first.
///
/// Ties on identical dates keep the earliest-inserted trip. Trips whose date
/// does not parse never qualify.
pub fn next_upcoming(trips: &[Trip], now: DateTime<Utc>) -> Option<&Trip> {
    trips
        .iter()
        .filter_map(|trip| parse_flexible(&trip.date).map(|date| (date, trip)))
        .filter(|(date, _)| *date > now)
        .min_by_key(|(date, _)| *date)
        .map(|(_, trip)| trip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_trip(id: &str, date: &str) -> Trip {
        Trip {
            id: id.to_string(),
            resort_id: "1".to_string(),
            date: date.to_string(),
            duration_days: 2,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_next_upcoming_picks_earliest_future_trip() {
        let trips = vec![
            make_trip("past", "2025-01-19T09:00:00Z"),
            make_trip("tomorrow", "2025-01-21T09:00:00Z"),
            make_trip("later", "2025-01-22T09:00:00Z"),
        ];

        let next = next_upcoming(&trips, now()).expect("Should find an upcoming trip");
        assert_eq!(next.id, "tomorrow");
    }

    #[test]
    fn test_next_upcoming_all_past_returns_none() {
        let trips = vec![
            make_trip("a", "2025-01-10T09:00:00Z"),
            make_trip("b", "2025-01-19T09:00:00Z"),
        ];

        assert!(next_upcoming(&trips, now()).is_none());
    }

    #[test]
    fn test_next_upcoming_tie_keeps_insertion_order() {
        let trips = vec![
            make_trip("first", "2025-01-25T09:00:00Z"),
            make_trip("second", "2025-01-25T09:00:00Z"),
        ];

        let next = next_upcoming(&trips, now()).expect("Should find an upcoming trip");
        assert_eq!(next.id, "first");
    }

    #[test]
    fn test_next_upcoming_skips_unparseable_dates() {
        let trips = vec![
            make_trip("garbage", "not-a-date"),
            make_trip("real", "2025-01-23T09:00:00Z"),
        ];

        let next = next_upcoming(&trips, now()).expect("Should find an upcoming trip");
        assert_eq!(next.id, "real");
    }

    #[test]
    fn test_merged_overrides_only_set_fields() {
        let trip = make_trip("1", "2025-01-21T09:00:00Z");
        let patch = TripPatch {
            duration_days: Some(5),
            ..TripPatch::default()
        };

        let updated = trip.merged(&patch);
        assert_eq!(updated.duration_days, 5);
        assert_eq!(updated.date, trip.date);
        assert_eq!(updated.resort_id, trip.resort_id);
    }

    #[test]
    fn test_merged_empty_patch_is_identity() {
        let trip = make_trip("1", "2025-01-21T09:00:00Z");
        assert_eq!(trip.merged(&TripPatch::default()), trip);
    }
}
