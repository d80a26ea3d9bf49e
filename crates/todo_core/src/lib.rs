//! Core logic for a single-user local todo list.
//! State, persistence and intent handling live here; front ends only render.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use logging::{
    default_log_level, flush_logging, init_logging, logging_status, LoggingError,
};
pub use model::todo::{element_id_for, next_todo_id, parse_item_ref, TodoId, TodoItem};
pub use repo::todo_repo::{
    KvTodoRepository, RepoError, RepoResult, TodoRepository, TODOS_STORAGE_KEY,
};
pub use search::filter::TodoFilter;
pub use service::controller::{
    resolve_item_ref, ControllerError, ControllerResult, TodoController,
};
pub use service::todo_state::{StateSnapshot, TodoState, TodoStateError};
pub use service::view::TodoView;
pub use store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError, StoreResult,
};

/// Minimal health-check API for front-end wiring probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
