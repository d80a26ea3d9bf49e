//! Domain model for the todo collection.
//!
//! # Responsibility
//! - Define the canonical item shape shared by state, persistence and views.
//!
//! # Invariants
//! - Every item is identified by an integer `TodoId` unique in its collection.
//! - Ids follow the last item, so gaps left by deletions stay unfilled.

pub mod todo;
