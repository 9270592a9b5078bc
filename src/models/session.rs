// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recorded riding session model and most-recent derivation.

use serde::{Deserialize, Serialize};

use crate::time_utils::parse_flexible;

/// A recorded session on the mountain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// Session date, usually a bare `YYYY-MM-DD` day string
    pub date: String,
    pub resort_id: String,
    /// Time on snow in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Distance covered in kilometers
    #[serde(rename = "distance")]
    pub distance_km: f64,
    /// Top speed in km/h
    #[serde(rename = "maxSpeed")]
    pub max_speed_kmh: f64,
    /// Coaching feedback shown on the session screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// Partial update for a session; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub date: Option<String>,
    pub resort_id: Option<String>,
    pub duration_minutes: Option<u32>,
    pub distance_km: Option<f64>,
    pub max_speed_kmh: Option<f64>,
    pub feedback: Option<String>,
}

impl Session {
    /// Apply a patch, producing the updated record.
    pub fn merged(&self, patch: &SessionPatch) -> Session {
        Session {
            id: self.id.clone(),
            date: patch.date.clone().unwrap_or_else(|| self.date.clone()),
            resort_id: patch
                .resort_id
                .clone()
                .unwrap_or_else(|| self.resort_id.clone()),
            duration_minutes: patch.duration_minutes.unwrap_or(self.duration_minutes),
            distance_km: patch.distance_km.unwrap_or(self.distance_km),
            max_speed_kmh: patch.max_speed_kmh.unwrap_or(self.max_speed_kmh),
            feedback: patch.feedback.clone().or_else(|| self.feedback.clone()),
        }
    }
}

/// The session with the latest date, or `None` for an empty collection.
///
/// Ties keep the earliest-inserted session. Sessions whose date does not
/// parse sort earliest.
pub fn most_recent(sessions: &[Session]) -> Option<&Session> {
    let mut ordered: Vec<&Session> = sessions.iter().collect();
    // Descending by parsed date; None parses sort last, stable sort keeps
    // insertion order on ties.
    ordered.sort_by(|a, b| parse_flexible(&b.date).cmp(&parse_flexible(&a.date)));
    ordered.into_iter().next()
}
