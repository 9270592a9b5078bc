// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Packing checklist model and completion/grouping derivations.

use serde::{Deserialize, Serialize};

/// Checklist item category, used for grouping on the checklist screen.
///
/// Unknown or missing categories deserialize to `Other`, so older blobs with
/// since-removed categories still hydrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gear,
    Clothing,
    Accessories,
    Documents,
    #[serde(other)]
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Other
    }
}

/// One item on the packing checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(default)]
    pub category: Category,
}

/// Partial update for a checklist item; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ChecklistItemPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub category: Option<Category>,
}

impl ChecklistItem {
    /// Apply a patch, producing the updated record.
    pub fn merged(&self, patch: &ChecklistItemPatch) -> ChecklistItem {
        ChecklistItem {
            id: self.id.clone(),
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            completed: patch.completed.unwrap_or(self.completed),
            category: patch.category.unwrap_or(self.category),
        }
    }
}

/// Packed percentage: `round(100 * completed / total)`, 0 for an empty list.
pub fn completion_percentage(items: &[ChecklistItem]) -> u32 {
    if items.is_empty() {
        return 0;
    }
    let completed = items.iter().filter(|item| item.completed).count();
    ((completed as f64 / items.len() as f64) * 100.0).round() as u32
}

/// Partition items by category for display.
///
/// Groups appear in first-seen order during the pass, not in a fixed
/// category order.
pub fn group_by_category(items: &[ChecklistItem]) -> Vec<(Category, Vec<ChecklistItem>)> {
    let mut groups: Vec<(Category, Vec<ChecklistItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, group)) => group.push(item.clone()),
            None => groups.push((item.category, vec![item.clone()])),
        }
    }
    groups
}
