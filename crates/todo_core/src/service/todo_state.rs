//! In-memory todo state.
//!
//! # Responsibility
//! - Own the authoritative collection and the selection pointer.
//! - Assign ids and apply add/delete/update mutations.
//!
//! # Invariants
//! - Selection is stored as an id and re-resolved on every read or write, so
//!   no caller holds an alias into the collection.
//! - Mutations here never persist; the controller performs the write.
//! - Missing ids make `delete` a no-op and `update_selected` return `None`.

use crate::model::todo::{next_todo_id, TodoId, TodoItem};
use crate::repo::todo_repo::{RepoResult, TodoRepository};
use crate::search::filter::TodoFilter;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// State-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoStateError {
    /// The last item already holds the largest representable id.
    IdSpaceExhausted,
}

impl Display for TodoStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdSpaceExhausted => write!(f, "no todo id left after {}", TodoId::MAX),
        }
    }
}

impl Error for TodoStateError {}

/// Owned copy of the state for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub items: Vec<TodoItem>,
    pub selected: Option<TodoId>,
}

/// Collection plus selection pointer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    items: Vec<TodoItem>,
    selected: Option<TodoId>,
}

impl TodoState {
    /// Creates state over an already loaded collection.
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    /// Seeds state from the persistence adapter.
    pub fn load(repo: &impl TodoRepository) -> RepoResult<Self> {
        let items = repo.load()?;
        info!(
            "event=state_load module=state status=ok count={}",
            items.len()
        );
        Ok(Self::new(items))
    }

    pub fn list(&self) -> &[TodoItem] {
        &self.items
    }

    /// Items matching `filter`, in collection order.
    pub fn visible(&self, filter: &TodoFilter) -> Vec<&TodoItem> {
        filter.apply(&self.items)
    }

    /// Points the selection at `id`. Membership is not checked here.
    pub fn select(&mut self, id: TodoId) {
        self.selected = Some(id);
    }

    pub fn selected_id(&self) -> Option<TodoId> {
        self.selected
    }

    /// Resolves the selection against the current collection.
    pub fn selected(&self) -> Option<&TodoItem> {
        self.selected.and_then(|id| self.find_by_id(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// First item with `id`.
    pub fn find_by_id(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends a new item with the next id and returns a copy of it.
    pub fn add(&mut self, title: impl Into<String>) -> Result<TodoItem, TodoStateError> {
        let id = next_todo_id(&self.items).ok_or(TodoStateError::IdSpaceExhausted)?;
        let item = TodoItem::new(id, title);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes every item with `id` and returns how many were removed.
    ///
    /// A selection pointing at a removed id is cleared.
    pub fn delete(&mut self, id: TodoId) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = before - self.items.len();
        if removed > 0 && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Overwrites the title of the selected item.
    ///
    /// Returns `None` when nothing is selected or the selected id is gone.
    /// Every item sharing the selected id receives the new title; the first
    /// one is returned.
    pub fn update_selected(&mut self, title: &str) -> Option<TodoItem> {
        let id = self.selected?;
        let mut updated = None;
        for item in self.items.iter_mut().filter(|item| item.id == id) {
            item.title = title.to_string();
            if updated.is_none() {
                updated = Some(item.clone());
            }
        }
        updated
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            items: self.items.clone(),
            selected: self.selected,
        }
    }
}
