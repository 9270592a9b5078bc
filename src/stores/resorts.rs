// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Read-only resort directory.

use crate::fixtures;
use crate::models::Resort;

/// Static resort catalog with id lookup and a preferred-resort fallback.
///
/// Unlike the other stores this is never persisted: the catalog is fixture
/// data, immutable for the life of the process.
#[derive(Default, Clone)]
pub struct ResortDirectory {
    resorts: Vec<Resort>,
}

impl ResortDirectory {
    pub fn new(resorts: Vec<Resort>) -> Self {
        Self { resorts }
    }

    /// Build the directory from the bundled catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(fixtures::resorts())
    }

    /// Get the full catalog, in catalog order.
    pub fn resorts(&self) -> &[Resort] {
        &self.resorts
    }

    /// Look up a resort by id.
    pub fn get(&self, id: &str) -> Option<&Resort> {
        self.resorts.iter().find(|resort| resort.id == id)
    }

    /// Resolve the user's preferred resort.
    ///
    /// A missing preference or one pointing at no known resort degrades
    /// silently to the first catalog entry. `None` only for an empty
    /// catalog.
    pub fn preferred(&self, preferred_id: Option<&str>) -> Option<&Resort> {
        if let Some(id) = preferred_id {
            if let Some(resort) = self.get(id) {
                return Some(resort);
            }
        }
        self.resorts.first()
    }
}
