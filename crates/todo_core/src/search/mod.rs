//! Item lookup helpers for list views.
//!
//! # Responsibility
//! - Narrow the visible collection without touching stored state.

pub mod filter;
