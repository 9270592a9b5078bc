// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store-layer error types.
//!
//! Lookup misses are not errors: accessors return `Option` and the UI layer
//! renders a "not found" state. These variants cover the persistence path
//! only, surfaced through `WriteHandle::wait` for callers that choose to
//! observe write results.

use crate::storage::StorageError;

/// Errors from store persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Storage(#[from] StorageError),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Persistence task failed: {0}")]
    Task(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
