use todo_core::{element_id_for, parse_item_ref, TodoItem};

#[test]
fn item_serializes_to_id_and_title_only() {
    let item = TodoItem::new(3, "Buy milk");

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 3, "title": "Buy milk" }));

    let decoded: TodoItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn item_rejects_negative_or_fractional_ids() {
    let negative = serde_json::json!({ "id": -1, "title": "x" });
    assert!(serde_json::from_value::<TodoItem>(negative).is_err());

    let fractional = serde_json::json!({ "id": 1.5, "title": "x" });
    assert!(serde_json::from_value::<TodoItem>(fractional).is_err());
}

#[test]
fn element_id_round_trips_through_item_ref() {
    let item = TodoItem::new(17, "Walk dog");
    assert_eq!(item.element_id(), "todo-17");
    assert_eq!(parse_item_ref(&item.element_id()), Some(17));
    assert_eq!(element_id_for(0), "todo-0");
}
