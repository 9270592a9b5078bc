// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Resort catalog entry.

use serde::{Deserialize, Serialize};

/// A resort in the static catalog.
///
/// The catalog is loaded once from fixture data and is read-only at runtime.
/// Invariant: `open_runs <= total_runs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resort {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Image URL for the resort card
    pub image: String,
    /// Snow base depth in centimeters
    #[serde(rename = "snowDepth")]
    pub snow_depth_cm: u32,
    /// Current temperature in degrees Celsius
    #[serde(rename = "temperature")]
    pub temperature_c: i32,
    /// Conditions summary ("Powder", "Packed", ...)
    pub conditions: String,
    pub open_runs: u32,
    pub total_runs: u32,
}
