//! Line-oriented rendering of the todo list.
//!
//! A terminal has no edit form, so edit-mode and input instructions print
//! nothing; only list changes reach the output.

use std::io::{self, Write};
use todo_core::{TodoFilter, TodoId, TodoItem, TodoView};

pub struct TerminalView<W: Write> {
    out: W,
    write_error: Option<io::Error>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            write_error: None,
        }
    }

    /// Flushes output and returns the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.write_error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_fmt(text).and_then(|()| self.out.write_all(b"\n")) {
            self.write_error = Some(err);
        }
    }
}

impl<W: Write> TodoView for TerminalView<W> {
    fn render_list(&mut self, items: &[&TodoItem], filter: &TodoFilter) {
        if items.is_empty() {
            if filter.is_blank() {
                self.line(format_args!("(no todos)"));
            } else {
                self.line(format_args!("(no todos match `{}`)", filter.as_str()));
            }
            return;
        }
        for item in items {
            self.line(format_args!("[{}] {}", item.id, item.title));
        }
    }

    fn insert_item(&mut self, item: &TodoItem) {
        self.line(format_args!("added [{}] {}", item.id, item.title));
    }

    fn update_item(&mut self, item: &TodoItem) {
        self.line(format_args!("updated [{}] {}", item.id, item.title));
    }

    fn remove_item(&mut self, id: TodoId) {
        self.line(format_args!("removed [{id}]"));
    }

    fn show_edit_mode(&mut self) {}

    fn clear_edit_mode(&mut self) {}

    fn set_input(&mut self, _title: &str) {}

    fn clear_input(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::TerminalView;
    use todo_core::{TodoFilter, TodoItem, TodoView};

    fn output(view: TerminalView<Vec<u8>>) -> String {
        String::from_utf8(view.finish().unwrap()).unwrap()
    }

    #[test]
    fn renders_rows_and_empty_marker() {
        let mut view = TerminalView::new(Vec::new());
        let a = TodoItem::new(0, "Buy milk");
        let b = TodoItem::new(2, "Walk dog");
        view.render_list(&[&a, &b], &TodoFilter::default());
        view.render_list(&[], &TodoFilter::default());
        assert_eq!(output(view), "[0] Buy milk\n[2] Walk dog\n(no todos)\n");
    }

    #[test]
    fn empty_filtered_list_names_the_query() {
        let mut view = TerminalView::new(Vec::new());
        view.render_list(&[], &TodoFilter::new("  Bread "));
        assert_eq!(output(view), "(no todos match `bread`)\n");
    }

    #[test]
    fn edit_mode_instructions_print_nothing() {
        let mut view = TerminalView::new(Vec::new());
        view.show_edit_mode();
        view.set_input("draft");
        view.clear_edit_mode();
        view.clear_input();
        assert_eq!(output(view), "");
    }
}
