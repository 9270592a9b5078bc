// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod checklist;
pub mod resort;
pub mod session;
pub mod stats;
pub mod trip;
pub mod user;

pub use checklist::{Category, ChecklistItem, ChecklistItemPatch};
pub use resort::Resort;
pub use session::{Session, SessionPatch};
pub use stats::DayCount;
pub use trip::{Trip, TripPatch};
pub use user::{SkillLevel, User};
