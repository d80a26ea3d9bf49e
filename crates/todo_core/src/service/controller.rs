//! Application controller.
//!
//! # Responsibility
//! - Translate user intents into state mutations, persistence writes and
//!   view instructions.
//! - Own the three collaborators for the lifetime of the session.
//!
//! # Invariants
//! - Each intent runs state mutation, then persistence, then rendering.
//! - A failed write restores the state held before the intent and returns
//!   before the view is touched, so memory never runs ahead of storage.
//! - Blank titles are rejected before reaching state.
//! - Filtering changes only what is rendered.

use crate::model::todo::{parse_item_ref, TodoId, TodoItem};
use crate::repo::todo_repo::{RepoError, RepoResult, TodoRepository};
use crate::search::filter::TodoFilter;
use crate::service::todo_state::{TodoState, TodoStateError};
use crate::service::view::TodoView;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Intent-level failure.
#[derive(Debug)]
pub enum ControllerError {
    Repo(RepoError),
    State(TodoStateError),
    /// Edit was requested for an id not in the collection.
    TodoNotFound(TodoId),
    /// Update was requested while nothing is selected.
    NoSelection,
    /// The selected id disappeared from the collection before update.
    SelectionMissing(TodoId),
    /// Item reference is neither `<id>` nor `todo-<id>`.
    InvalidItemRef(String),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::State(err) => write!(f, "{err}"),
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::NoSelection => write!(f, "no todo is selected for editing"),
            Self::SelectionMissing(id) => write!(f, "selected todo {id} no longer exists"),
            Self::InvalidItemRef(value) => {
                write!(f, "invalid todo reference `{value}`; expected `<id>` or `todo-<id>`")
            }
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::State(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ControllerError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<TodoStateError> for ControllerError {
    fn from(value: TodoStateError) -> Self {
        Self::State(value)
    }
}

/// Resolves a user-supplied `<id>` / `todo-<id>` reference.
pub fn resolve_item_ref(value: &str) -> ControllerResult<TodoId> {
    parse_item_ref(value).ok_or_else(|| ControllerError::InvalidItemRef(value.to_string()))
}

/// Wires state, persistence and rendering together.
pub struct TodoController<R: TodoRepository, V: TodoView> {
    state: TodoState,
    repo: R,
    view: V,
    filter: TodoFilter,
}

impl<R: TodoRepository, V: TodoView> TodoController<R, V> {
    /// Loads state from `repo` and builds a controller.
    ///
    /// Fails with `RepoError::CorruptData` when the stored blob is malformed.
    pub fn new(repo: R, view: V) -> ControllerResult<Self> {
        let state = TodoState::load(&repo)?;
        Ok(Self::with_state(state, repo, view))
    }

    pub fn with_state(state: TodoState, repo: R, view: V) -> Self {
        Self {
            state,
            repo,
            view,
            filter: TodoFilter::default(),
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn active_filter(&self) -> &TodoFilter {
        &self.filter
    }

    /// Resets edit mode and renders the visible collection.
    pub fn init(&mut self) {
        self.view.clear_edit_mode();
        self.render_visible();
    }

    /// Adds a todo from the title input.
    ///
    /// Returns `Ok(None)` without side effects for blank input.
    pub fn add(&mut self, title: &str) -> ControllerResult<Option<TodoItem>> {
        if title.trim().is_empty() {
            info!("event=todo_add module=controller status=noop reason=blank_title");
            return Ok(None);
        }

        let previous = self.state.clone();
        let item = self.state.add(title)?;
        self.commit("todo_add", previous, |repo| repo.append_and_save(&item))?;

        if self.filter.matches(&item) {
            self.view.insert_item(&item);
        }
        self.view.clear_input();

        info!(
            "event=todo_add module=controller status=ok id={} title_len={}",
            item.id,
            item.title.chars().count()
        );
        Ok(Some(item))
    }

    /// Selects `id` for editing and loads its title into the input.
    pub fn begin_edit(&mut self, id: TodoId) -> ControllerResult<TodoItem> {
        let item = self
            .state
            .find_by_id(id)
            .cloned()
            .ok_or(ControllerError::TodoNotFound(id))?;

        self.state.select(item.id);
        self.view.show_edit_mode();
        self.view.set_input(&item.title);

        info!("event=todo_edit_begin module=controller status=ok id={id}");
        Ok(item)
    }

    /// Same as [`Self::begin_edit`] for a `<id>` / `todo-<id>` reference.
    pub fn begin_edit_ref(&mut self, item_ref: &str) -> ControllerResult<TodoItem> {
        let id = resolve_item_ref(item_ref)?;
        self.begin_edit(id)
    }

    /// Applies `title` to the selected todo and leaves edit mode.
    ///
    /// Returns `Ok(None)` without side effects for blank input.
    pub fn update(&mut self, title: &str) -> ControllerResult<Option<TodoItem>> {
        if title.trim().is_empty() {
            info!("event=todo_update module=controller status=noop reason=blank_title");
            return Ok(None);
        }

        let selected_id = self.state.selected_id().ok_or(ControllerError::NoSelection)?;
        let previous = self.state.clone();
        let Some(item) = self.state.update_selected(title) else {
            warn!(
                "event=todo_update module=controller status=error error_code=selection_missing id={selected_id}"
            );
            self.state.clear_selection();
            self.view.clear_edit_mode();
            return Err(ControllerError::SelectionMissing(selected_id));
        };

        self.commit("todo_update", previous, |repo| repo.update_and_save(&item))?;

        if self.filter.matches(&item) {
            self.view.update_item(&item);
        } else {
            self.view.remove_item(item.id);
        }
        self.view.clear_edit_mode();
        self.view.clear_input();
        self.state.clear_selection();

        info!(
            "event=todo_update module=controller status=ok id={} title_len={}",
            item.id,
            item.title.chars().count()
        );
        Ok(Some(item))
    }

    /// Deletes every todo with `id`. Returns `false` when none existed.
    pub fn delete(&mut self, id: TodoId) -> ControllerResult<bool> {
        let previous = self.state.clone();
        let removed = self.state.delete(id);
        if removed == 0 {
            info!("event=todo_delete module=controller status=noop id={id}");
            return Ok(false);
        }

        self.commit("todo_delete", previous, |repo| repo.remove_and_save(id))?;
        self.view.remove_item(id);

        info!("event=todo_delete module=controller status=ok id={id} removed={removed}");
        Ok(true)
    }

    /// Same as [`Self::delete`] for a `<id>` / `todo-<id>` reference.
    pub fn delete_ref(&mut self, item_ref: &str) -> ControllerResult<bool> {
        let id = resolve_item_ref(item_ref)?;
        self.delete(id)
    }

    /// Leaves edit mode without applying changes.
    pub fn cancel_edit(&mut self) {
        self.view.clear_edit_mode();
        self.state.clear_selection();
    }

    /// Re-renders only todos whose title contains `text` (case-insensitive).
    ///
    /// Returns the number of visible rows.
    pub fn filter(&mut self, text: &str) -> usize {
        self.filter = TodoFilter::new(text);
        self.render_visible()
    }

    pub fn clear_filter(&mut self) -> usize {
        self.filter = TodoFilter::default();
        self.render_visible()
    }

    /// Deletes the whole collection, in memory and in storage.
    ///
    /// Returns how many todos were removed.
    pub fn clear_all(&mut self) -> ControllerResult<usize> {
        let previous = self.state.clone();
        let ids: Vec<TodoId> = self.state.list().iter().map(|item| item.id).collect();
        let mut removed = 0;
        for id in ids {
            removed += self.state.delete(id);
        }
        self.state.clear_selection();
        self.commit("todo_clear", previous, |repo| repo.clear())?;
        self.view.clear_edit_mode();
        self.render_visible();

        info!("event=todo_clear module=controller status=ok removed={removed}");
        Ok(removed)
    }

    /// Consumes the controller and returns its collaborators.
    pub fn into_parts(self) -> (TodoState, R, V) {
        (self.state, self.repo, self.view)
    }

    /// Runs the storage write for an intent whose state change is already applied.
    fn commit<T>(
        &mut self,
        event: &str,
        previous: TodoState,
        write: impl FnOnce(&R) -> RepoResult<T>,
    ) -> ControllerResult<T> {
        match write(&self.repo) {
            Ok(value) => Ok(value),
            Err(err) => {
                // Why: keeping a change storage rejected would let the next add
                // persist a later id while this one lives only in memory.
                self.state = previous;
                warn!(
                    "event={event} module=controller status=error error_code=write_failed rolled_back=true error={err}"
                );
                Err(err.into())
            }
        }
    }

    fn render_visible(&mut self) -> usize {
        let visible = self.state.visible(&self.filter);
        let count = visible.len();
        self.view.render_list(&visible, &self.filter);
        count
    }
}
