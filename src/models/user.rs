//! User profile model for storage and display.

use serde::{Deserialize, Serialize};

/// Rider skill level, as picked on the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// The single active user profile.
///
/// Serialized camelCase so snapshots stay compatible with blobs written by
/// earlier app versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    /// Resort the home screen highlights; may point at nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_resort_id: Option<String>,
}
