//! Persistence adapters for the todo collection.
//!
//! # Responsibility
//! - Define the durable storage contract used at startup and after mutations.
//! - Keep serialization details out of the state and controller layers.
//!
//! # Invariants
//! - The whole collection is rewritten on every save.
//! - Malformed stored data surfaces as `RepoError::CorruptData`.

pub mod todo_repo;
