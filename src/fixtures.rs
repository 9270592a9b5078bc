// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Static fixture datasets.
//!
//! Used as store defaults before any user mutation, and again whenever a
//! persisted snapshot is missing or fails to parse.

use crate::models::{Category, ChecklistItem, Resort, Session, SkillLevel, Trip, User};

/// The read-only resort catalog.
pub fn resorts() -> Vec<Resort> {
    vec![
        Resort {
            id: "1".to_string(),
            name: "Whistler Blackcomb".to_string(),
            location: "British Columbia, Canada".to_string(),
            image: "https://images.unsplash.com/photo-1551524559-8af4e6624178".to_string(),
            snow_depth_cm: 217,
            temperature_c: -8,
            conditions: "Powder".to_string(),
            open_runs: 187,
            total_runs: 200,
        },
        Resort {
            id: "2".to_string(),
            name: "Zermatt".to_string(),
            location: "Valais, Switzerland".to_string(),
            image: "https://images.unsplash.com/photo-1520891422668-fe731254aff0".to_string(),
            snow_depth_cm: 185,
            temperature_c: -11,
            conditions: "Packed powder".to_string(),
            open_runs: 132,
            total_runs: 147,
        },
        Resort {
            id: "3".to_string(),
            name: "Niseko United".to_string(),
            location: "Hokkaido, Japan".to_string(),
            image: "https://images.unsplash.com/photo-1542144582-1ba00456b5e3".to_string(),
            snow_depth_cm: 340,
            temperature_c: -6,
            conditions: "Powder".to_string(),
            open_runs: 59,
            total_runs: 61,
        },
        Resort {
            id: "4".to_string(),
            name: "Chamonix Mont-Blanc".to_string(),
            location: "Haute-Savoie, France".to_string(),
            image: "https://images.unsplash.com/photo-1517654443271-21d3977ae3b8".to_string(),
            snow_depth_cm: 142,
            temperature_c: -4,
            conditions: "Groomed".to_string(),
            open_runs: 94,
            total_runs: 118,
        },
        Resort {
            id: "5".to_string(),
            name: "Park City".to_string(),
            location: "Utah, United States".to_string(),
            image: "https://images.unsplash.com/photo-1605540436563-5bca919ae766".to_string(),
            snow_depth_cm: 160,
            temperature_c: -7,
            conditions: "Packed".to_string(),
            open_runs: 301,
            total_runs: 330,
        },
    ]
}

/// Profile created at first launch.
pub fn default_user() -> User {
    User {
        id: "1".to_string(),
        name: "James".to_string(),
        level: SkillLevel::Intermediate,
        preferred_resort_id: Some("1".to_string()),
    }
}

/// Planned trips shown before the user adds their own.
pub fn default_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "1".to_string(),
            resort_id: "1".to_string(),
            date: "2025-01-21T09:00:00.000Z".to_string(),
            duration_days: 1,
        },
        Trip {
            id: "2".to_string(),
            resort_id: "2".to_string(),
            date: "2025-02-15T08:00:00.000Z".to_string(),
            duration_days: 3,
        },
        Trip {
            id: "3".to_string(),
            resort_id: "4".to_string(),
            date: "2025-03-05T10:00:00.000Z".to_string(),
            duration_days: 5,
        },
    ]
}

/// Recorded sessions shown before the user records their own.
pub fn default_sessions() -> Vec<Session> {
    vec![
        Session {
            id: "1".to_string(),
            date: "2025-01-02".to_string(),
            resort_id: "1".to_string(),
            duration_minutes: 240,
            distance_km: 28.5,
            max_speed_kmh: 52.0,
            feedback: Some("Your turns are smoother!".to_string()),
        },
        Session {
            id: "2".to_string(),
            date: "2025-01-05".to_string(),
            resort_id: "2".to_string(),
            duration_minutes: 300,
            distance_km: 42.3,
            max_speed_kmh: 65.0,
            feedback: None,
        },
        Session {
            id: "3".to_string(),
            date: "2025-01-09".to_string(),
            resort_id: "1".to_string(),
            duration_minutes: 180,
            distance_km: 22.1,
            max_speed_kmh: 48.0,
            feedback: None,
        },
        Session {
            id: "4".to_string(),
            date: "2025-01-12".to_string(),
            resort_id: "3".to_string(),
            duration_minutes: 270,
            distance_km: 35.7,
            max_speed_kmh: 58.0,
            feedback: None,
        },
        Session {
            id: "5".to_string(),
            date: "2025-01-16".to_string(),
            resort_id: "2".to_string(),
            duration_minutes: 330,
            distance_km: 45.2,
            max_speed_kmh: 72.0,
            feedback: None,
        },
    ]
}

/// Default packing checklist.
pub fn default_checklist() -> Vec<ChecklistItem> {
    let items = [
        ("1", "Snowboard", true, Category::Gear),
        ("2", "Bindings", true, Category::Gear),
        ("3", "Boots", true, Category::Gear),
        ("4", "Helmet", false, Category::Gear),
        ("5", "Goggles", false, Category::Gear),
        ("6", "Snow jacket", false, Category::Clothing),
        ("7", "Snow pants", false, Category::Clothing),
        ("8", "Base layers", false, Category::Clothing),
        ("9", "Gloves", false, Category::Accessories),
        ("10", "Lift pass", false, Category::Documents),
    ];

    items
        .into_iter()
        .map(|(id, title, completed, category)| ChecklistItem {
            id: id.to_string(),
            title: title.to_string(),
            completed,
            category,
        })
        .collect()
}
