//! Title filter used by list views.
//!
//! # Invariants
//! - Matching is a case-insensitive substring test on the trimmed query.
//! - A blank query matches every item.
//! - Filtering never reorders or mutates the collection.

use crate::model::todo::TodoItem;

/// Normalized filter text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    needle: String,
}

impl TodoFilter {
    /// Builds a filter from raw user input (trimmed, lowercased).
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    /// Returns `true` when the filter matches everything.
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    /// Normalized needle.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        self.is_blank() || item.title.to_lowercase().contains(&self.needle)
    }

    /// Returns matching items in collection order.
    pub fn apply<'a>(&self, items: &'a [TodoItem]) -> Vec<&'a TodoItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
