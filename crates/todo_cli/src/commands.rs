//! Maps parsed subcommands onto controller intents.

use crate::cli::Command;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use todo_core::{ControllerError, TodoController, TodoRepository, TodoView};

/// User-facing command failure.
#[derive(Debug)]
pub enum CommandError {
    Controller(ControllerError),
    BlankTitle,
    NothingToDelete(String),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Controller(err) => write!(f, "{err}"),
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::NothingToDelete(item) => write!(f, "no todo matches `{item}`"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Controller(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ControllerError> for CommandError {
    fn from(value: ControllerError) -> Self {
        Self::Controller(value)
    }
}

/// Runs one list-changing subcommand against `controller`.
///
/// `Info` carries no intent and is a no-op here.
pub fn execute<R: TodoRepository, V: TodoView>(
    controller: &mut TodoController<R, V>,
    command: &Command,
) -> Result<(), CommandError> {
    match command {
        Command::List { filter } => {
            let visible = match filter {
                Some(text) => controller.filter(text),
                None => {
                    controller.init();
                    controller.state().list().len()
                }
            };
            info!("event=cli_list module=cli status=ok visible={visible}");
        }
        Command::Add { title } => {
            controller.add(title)?.ok_or(CommandError::BlankTitle)?;
        }
        Command::Edit { item, title } => {
            controller.begin_edit_ref(item)?;
            if controller.update(title)?.is_none() {
                controller.cancel_edit();
                return Err(CommandError::BlankTitle);
            }
        }
        Command::Delete { item } => {
            if !controller.delete_ref(item)? {
                return Err(CommandError::NothingToDelete(item.clone()));
            }
        }
        Command::Clear => {
            let removed = controller.clear_all()?;
            info!("event=cli_clear module=cli status=ok removed={removed}");
        }
        Command::Info => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute, CommandError};
    use crate::cli::Command;
    use crate::terminal_view::TerminalView;
    use todo_core::{
        ControllerError, KvTodoRepository, MemoryKeyValueStore, TodoController, TodoItem,
        TodoRepository,
    };

    fn run(store: &MemoryKeyValueStore, command: Command) -> (Result<(), CommandError>, String) {
        let mut controller = TodoController::new(
            KvTodoRepository::new(store),
            TerminalView::new(Vec::<u8>::new()),
        )
        .unwrap();
        let result = execute(&mut controller, &command);
        let (_, _, view) = controller.into_parts();
        let out = String::from_utf8(view.finish().unwrap()).unwrap();
        (result, out)
    }

    fn add(store: &MemoryKeyValueStore, title: &str) {
        let (result, _) = run(
            store,
            Command::Add {
                title: title.to_string(),
            },
        );
        result.unwrap();
    }

    #[test]
    fn each_invocation_reloads_stored_state() {
        let store = MemoryKeyValueStore::new();
        add(&store, "Buy milk");
        add(&store, "Walk dog");
        add(&store, "milk delivery");

        let (result, out) = run(&store, Command::List { filter: None });
        result.unwrap();
        assert_eq!(out, "[0] Buy milk\n[1] Walk dog\n[2] milk delivery\n");

        let (result, out) = run(
            &store,
            Command::List {
                filter: Some("Milk".to_string()),
            },
        );
        result.unwrap();
        assert_eq!(out, "[0] Buy milk\n[2] milk delivery\n");

        let (result, out) = run(
            &store,
            Command::List {
                filter: Some("bread".to_string()),
            },
        );
        result.unwrap();
        assert_eq!(out, "(no todos match `bread`)\n");
    }

    #[test]
    fn edit_and_delete_accept_element_ids() {
        let store = MemoryKeyValueStore::new();
        add(&store, "draft");
        add(&store, "other");

        let (result, out) = run(
            &store,
            Command::Edit {
                item: "todo-0".to_string(),
                title: "final".to_string(),
            },
        );
        result.unwrap();
        assert_eq!(out, "updated [0] final\n");

        let (result, out) = run(
            &store,
            Command::Delete {
                item: "1".to_string(),
            },
        );
        result.unwrap();
        assert_eq!(out, "removed [1]\n");

        assert_eq!(
            KvTodoRepository::new(&store).load().unwrap(),
            vec![TodoItem::new(0, "final")]
        );
    }

    #[test]
    fn blank_titles_and_unknown_items_are_reported() {
        let store = MemoryKeyValueStore::new();
        add(&store, "a");

        let (result, _) = run(
            &store,
            Command::Add {
                title: " ".to_string(),
            },
        );
        assert!(matches!(result, Err(CommandError::BlankTitle)));

        let (result, _) = run(
            &store,
            Command::Edit {
                item: "0".to_string(),
                title: String::new(),
            },
        );
        assert!(matches!(result, Err(CommandError::BlankTitle)));

        let (result, _) = run(
            &store,
            Command::Delete {
                item: "todo-9".to_string(),
            },
        );
        assert!(matches!(result, Err(CommandError::NothingToDelete(_))));

        let (result, _) = run(
            &store,
            Command::Edit {
                item: "nine".to_string(),
                title: "x".to_string(),
            },
        );
        assert!(matches!(
            result,
            Err(CommandError::Controller(ControllerError::InvalidItemRef(_)))
        ));
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryKeyValueStore::new();
        add(&store, "a");
        add(&store, "b");

        let (result, out) = run(&store, Command::Clear);
        result.unwrap();
        assert_eq!(out, "(no todos)\n");
        assert!(store.is_empty());
    }
}
