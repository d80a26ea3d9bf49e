//! Todo persistence adapter over a key-value store.
//!
//! # Responsibility
//! - Serialize the whole collection as one JSON blob under `todos`.
//! - Provide append/remove/update helpers that rewrite the full blob.
//!
//! # Invariants
//! - Every write replaces the previous blob; there is no delta or versioning.
//! - A missing entry reads as an empty collection.
//! - A blob that fails to deserialize is reported as `CorruptData`, never
//!   silently replaced.
//! - `remove_and_save` and `update_and_save` are no-ops when no entry exists.

use crate::model::todo::{TodoId, TodoItem};
use crate::store::{KeyValueStore, StoreError};
use log::{debug, error};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized collection.
pub const TODOS_STORAGE_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence adapter error.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    /// Stored blob is not a valid serialized collection.
    CorruptData(String),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::CorruptData(message) => write!(f, "corrupt persisted todo data: {message}"),
            Self::Encode(err) => write!(f, "failed to encode todo collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::CorruptData(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Durable storage contract for the todo collection.
pub trait TodoRepository {
    /// Reads the stored collection, or an empty one when nothing is stored.
    fn load(&self) -> RepoResult<Vec<TodoItem>>;
    /// Overwrites the stored collection with `items`.
    fn save_all(&self, items: &[TodoItem]) -> RepoResult<()>;
    /// Appends `item` to the stored collection, creating it when missing.
    fn append_and_save(&self, item: &TodoItem) -> RepoResult<()>;
    /// Drops every stored item with `id`. Returns how many were removed.
    fn remove_and_save(&self, id: TodoId) -> RepoResult<usize>;
    /// Copies `item.title` onto every stored item with the same id.
    /// Returns how many were changed.
    fn update_and_save(&self, item: &TodoItem) -> RepoResult<usize>;
    /// Removes the stored entry entirely.
    fn clear(&self) -> RepoResult<()>;
}

/// JSON-over-key-value implementation of [`TodoRepository`].
pub struct KvTodoRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> KvTodoRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_stored(&self) -> RepoResult<Option<Vec<TodoItem>>> {
        match self.store.get(TODOS_STORAGE_KEY)? {
            Some(blob) => decode_collection(&blob).map(Some),
            None => Ok(None),
        }
    }

    fn write(&self, items: &[TodoItem]) -> RepoResult<()> {
        let blob = encode_collection(items)?;
        self.store.set(TODOS_STORAGE_KEY, &blob)?;
        debug!(
            "event=todos_write module=repo status=ok count={} bytes={}",
            items.len(),
            blob.len()
        );
        Ok(())
    }
}

impl<S: KeyValueStore> TodoRepository for KvTodoRepository<S> {
    fn load(&self) -> RepoResult<Vec<TodoItem>> {
        Ok(self.read_stored()?.unwrap_or_default())
    }

    fn save_all(&self, items: &[TodoItem]) -> RepoResult<()> {
        self.write(items)
    }

    fn append_and_save(&self, item: &TodoItem) -> RepoResult<()> {
        let mut items = self.read_stored()?.unwrap_or_default();
        items.push(item.clone());
        self.write(&items)
    }

    fn remove_and_save(&self, id: TodoId) -> RepoResult<usize> {
        let Some(mut items) = self.read_stored()? else {
            return Ok(0);
        };
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = before - items.len();
        self.write(&items)?;
        Ok(removed)
    }

    fn update_and_save(&self, item: &TodoItem) -> RepoResult<usize> {
        let Some(mut items) = self.read_stored()? else {
            return Ok(0);
        };
        let mut changed = 0;
        for stored in items.iter_mut().filter(|stored| stored.id == item.id) {
            stored.title.clone_from(&item.title);
            changed += 1;
        }
        self.write(&items)?;
        Ok(changed)
    }

    fn clear(&self) -> RepoResult<()> {
        self.store.remove(TODOS_STORAGE_KEY)?;
        Ok(())
    }
}

fn decode_collection(blob: &str) -> RepoResult<Vec<TodoItem>> {
    serde_json::from_str(blob).map_err(|err| {
        error!(
            "event=todos_read module=repo status=error error_code=corrupt_data bytes={} error={err}",
            blob.len()
        );
        RepoError::CorruptData(err.to_string())
    })
}

fn encode_collection(items: &[TodoItem]) -> RepoResult<String> {
    serde_json::to_string(items).map_err(RepoError::Encode)
}
