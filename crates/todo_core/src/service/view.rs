//! Rendering collaborator driven by the controller.
//!
//! Views only reflect state; they never mutate it. Every method is a
//! fire-and-forget instruction.

use crate::model::todo::{TodoId, TodoItem};
use crate::search::filter::TodoFilter;

pub trait TodoView {
    /// Replaces the rendered list with `items`, in order.
    ///
    /// `filter` is the query that selected `items`; it is blank when the
    /// whole collection is shown.
    fn render_list(&mut self, items: &[&TodoItem], filter: &TodoFilter);
    /// Appends one row.
    fn insert_item(&mut self, item: &TodoItem);
    /// Re-renders the row for `item.id`.
    fn update_item(&mut self, item: &TodoItem);
    /// Drops the row for `id`.
    fn remove_item(&mut self, id: TodoId);
    /// Shows the update/cancel controls and hides add.
    fn show_edit_mode(&mut self);
    /// Shows add, hides update/cancel and clears the title input.
    fn clear_edit_mode(&mut self);
    /// Puts `title` into the title input.
    fn set_input(&mut self, title: &str);
    fn clear_input(&mut self);
}

impl<V: TodoView + ?Sized> TodoView for &mut V {
    fn render_list(&mut self, items: &[&TodoItem], filter: &TodoFilter) {
        (**self).render_list(items, filter);
    }

    fn insert_item(&mut self, item: &TodoItem) {
        (**self).insert_item(item);
    }

    fn update_item(&mut self, item: &TodoItem) {
        (**self).update_item(item);
    }

    fn remove_item(&mut self, id: TodoId) {
        (**self).remove_item(id);
    }

    fn show_edit_mode(&mut self) {
        (**self).show_edit_mode();
    }

    fn clear_edit_mode(&mut self) {
        (**self).clear_edit_mode();
    }

    fn set_input(&mut self, title: &str) {
        (**self).set_input(title);
    }

    fn clear_input(&mut self) {
        (**self).clear_input();
    }
}
