use todo_core::db::{open_db, open_db_in_memory};
use todo_core::{
    KeyValueStore, KvTodoRepository, MemoryKeyValueStore, RepoError, SqliteKeyValueStore,
    TodoItem, TodoRepository, TodoState, TODOS_STORAGE_KEY,
};

fn items(pairs: &[(u64, &str)]) -> Vec<TodoItem> {
    pairs
        .iter()
        .map(|(id, title)| TodoItem::new(*id, *title))
        .collect()
}

#[test]
fn load_without_entry_is_empty() {
    let repo = KvTodoRepository::new(MemoryKeyValueStore::new());
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn save_all_then_load_preserves_ids_titles_and_order() {
    let repo = KvTodoRepository::new(MemoryKeyValueStore::new());
    let collection = items(&[(5, "later"), (1, "Buy milk"), (9, "Walk dog")]);

    repo.save_all(&collection).unwrap();
    assert_eq!(repo.load().unwrap(), collection);
}

#[test]
fn stored_blob_is_a_json_array_under_todos_key() {
    let store = MemoryKeyValueStore::new();
    let repo = KvTodoRepository::new(&store);
    repo.append_and_save(&TodoItem::new(0, "Buy milk")).unwrap();

    let blob = store.get(TODOS_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(value, serde_json::json!([{ "id": 0, "title": "Buy milk" }]));
}

#[test]
fn append_creates_entry_then_extends_it() {
    let repo = KvTodoRepository::new(MemoryKeyValueStore::new());
    repo.append_and_save(&TodoItem::new(0, "A")).unwrap();
    repo.append_and_save(&TodoItem::new(1, "B")).unwrap();

    assert_eq!(repo.load().unwrap(), items(&[(0, "A"), (1, "B")]));
}

#[test]
fn remove_and_update_are_noops_without_entry() {
    let store = MemoryKeyValueStore::new();
    let repo = KvTodoRepository::new(&store);

    assert_eq!(repo.remove_and_save(0).unwrap(), 0);
    assert_eq!(repo.update_and_save(&TodoItem::new(0, "x")).unwrap(), 0);
    assert_eq!(store.get(TODOS_STORAGE_KEY).unwrap(), None);
}

#[test]
fn remove_filters_every_matching_id() {
    let repo = KvTodoRepository::new(MemoryKeyValueStore::new());
    repo.save_all(&items(&[(1, "a"), (2, "b"), (1, "c")])).unwrap();

    assert_eq!(repo.remove_and_save(1).unwrap(), 2);
    assert_eq!(repo.load().unwrap(), items(&[(2, "b")]));

    assert_eq!(repo.remove_and_save(42).unwrap(), 0);
    assert_eq!(repo.load().unwrap(), items(&[(2, "b")]));
}

#[test]
fn update_overwrites_title_of_matching_items_only() {
    let repo = KvTodoRepository::new(MemoryKeyValueStore::new());
    repo.save_all(&items(&[(0, "draft"), (1, "other"), (0, "dup")]))
        .unwrap();

    let changed = repo.update_and_save(&TodoItem::new(0, "final")).unwrap();
    assert_eq!(changed, 2);
    assert_eq!(
        repo.load().unwrap(),
        items(&[(0, "final"), (1, "other"), (0, "final")])
    );
}

#[test]
fn corrupt_blob_is_reported_by_every_read_path() {
    let store = MemoryKeyValueStore::new();
    store.set(TODOS_STORAGE_KEY, "{not json").unwrap();
    let repo = KvTodoRepository::new(&store);

    assert!(matches!(repo.load(), Err(RepoError::CorruptData(_))));
    assert!(matches!(
        repo.append_and_save(&TodoItem::new(0, "x")),
        Err(RepoError::CorruptData(_))
    ));
    assert!(matches!(
        repo.remove_and_save(0),
        Err(RepoError::CorruptData(_))
    ));
    assert!(matches!(
        repo.update_and_save(&TodoItem::new(0, "x")),
        Err(RepoError::CorruptData(_))
    ));
    assert_eq!(
        store.get(TODOS_STORAGE_KEY).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn wrong_shape_is_corrupt_data() {
    let store = MemoryKeyValueStore::new();
    store
        .set(TODOS_STORAGE_KEY, r#"[{"id":"zero","title":"x"}]"#)
        .unwrap();
    let repo = KvTodoRepository::new(&store);

    let err = repo.load().unwrap_err();
    assert!(err.to_string().contains("corrupt persisted todo data"));
}

#[test]
fn clear_removes_entry() {
    let repo = KvTodoRepository::new(MemoryKeyValueStore::new());
    repo.save_all(&items(&[(0, "a")])).unwrap();
    repo.clear().unwrap();
    assert!(repo.load().unwrap().is_empty());
    assert!(repo.store().is_empty());
}

#[test]
fn sqlite_backed_repository_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = KvTodoRepository::new(SqliteKeyValueStore::new(&conn));
        repo.append_and_save(&TodoItem::new(0, "A")).unwrap();
        repo.append_and_save(&TodoItem::new(1, "B")).unwrap();
        repo.remove_and_save(0).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = KvTodoRepository::new(SqliteKeyValueStore::new(&conn));
    let state = TodoState::load(&repo).unwrap();
    assert_eq!(state.list(), items(&[(1, "B")]).as_slice());
}

#[test]
fn state_seeded_from_storage_continues_id_sequence() {
    let conn = open_db_in_memory().unwrap();
    let repo = KvTodoRepository::new(SqliteKeyValueStore::new(&conn));
    repo.save_all(&items(&[(3, "a"), (7, "b")])).unwrap();

    let mut state = TodoState::load(&repo).unwrap();
    assert_eq!(state.add("c").unwrap().id, 8);
}
