// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! The application stores: one per entity type, each owning its collection.
//!
//! Persisted stores are built on [`persisted::Persisted`]; the resort
//! directory is read-only and lives purely in memory.

pub mod checklist;
pub mod persisted;
pub mod resorts;
pub mod sessions;
pub mod trips;
pub mod user;

pub use checklist::ChecklistStore;
pub use persisted::{Persisted, WriteHandle};
pub use resorts::ResortDirectory;
pub use sessions::SessionStore;
pub use trips::TripStore;
pub use user::UserStore;
