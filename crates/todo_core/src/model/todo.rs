//! Todo domain model.
//!
//! # Responsibility
//! - Define the single record type stored in the collection.
//! - Own the id assignment policy and the `todo-<id>` row identifier format.
//!
//! # Invariants
//! - `id` is unique within one collection.
//! - New ids are derived from the last item (`last.id + 1`), never from the
//!   collection length. Gaps left by deleting inner items are never filled;
//!   deleting the tail item lets its id be assigned again.
//! - The model does not validate `title`; callers reject blank input.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static ITEM_REF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:todo-)?(\d+)$").expect("valid item ref regex"));

/// Integer identifier of a todo item inside its collection.
pub type TodoId = u64;

/// Prefix used for rendered row identifiers (`todo-3`).
pub const ITEM_ELEMENT_PREFIX: &str = "todo-";

/// One entry of the todo collection.
///
/// Serialized as `{"id": <int>, "title": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
}

impl TodoItem {
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Returns the row identifier used by views, e.g. `todo-7`.
    pub fn element_id(&self) -> String {
        element_id_for(self.id)
    }
}

/// Builds the row identifier for `id`.
pub fn element_id_for(id: TodoId) -> String {
    format!("{ITEM_ELEMENT_PREFIX}{id}")
}

/// Computes the id for the next appended item.
///
/// Returns `Some(0)` for an empty collection and `None` when the last id is
/// already `TodoId::MAX`.
pub fn next_todo_id(items: &[TodoItem]) -> Option<TodoId> {
    match items.last() {
        Some(last) => last.id.checked_add(1),
        None => Some(0),
    }
}

/// Parses an item reference given either as a bare id (`3`) or as a row
/// identifier (`todo-3`). Surrounding whitespace is ignored.
pub fn parse_item_ref(value: &str) -> Option<TodoId> {
    ITEM_REF_RE
        .captures(value.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<TodoId>().ok())
}
