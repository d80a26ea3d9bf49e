//! State and intent orchestration.
//!
//! # Responsibility
//! - Hold the in-memory collection and selection (`todo_state`).
//! - Route user intents through state, persistence and the view (`controller`).
//!
//! # Invariants
//! - Rendering never mutates state.

pub mod controller;
pub mod todo_state;
pub mod view;
