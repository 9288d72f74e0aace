use super::*;

// =============================================================
// Task decoding
// =============================================================

#[test]
fn task_decodes_mongo_id_alias() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-1",
        "title": "Call supplier",
        "status": "in_progress",
        "priority": "high"
    }))
    .expect("task");
    assert_eq!(task.id, "t-1");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, Priority::High);
    assert!(task.description.is_none());
    assert!(task.due_date.is_none());
}

#[test]
fn task_decodes_plain_id_and_optionals() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "t-2",
        "title": "Ship order",
        "description": "Pallet 4",
        "status": "done",
        "priority": "low",
        "due_date": "2025-03-01T09:00:00Z"
    }))
    .expect("task");
    assert_eq!(task.id, "t-2");
    assert_eq!(task.description.as_deref(), Some("Pallet 4"));
    assert_eq!(task.due_date.as_deref(), Some("2025-03-01T09:00:00Z"));
}

#[test]
fn task_without_status_defaults_to_todo() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "_id": "t-3",
        "title": "Untriaged"
    }))
    .expect("task");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, Priority::Medium);
}

// =============================================================
// Status / priority fallback
// =============================================================

#[test]
fn unknown_status_is_preserved_in_other() {
    assert_eq!(
        TaskStatus::from("blocked".to_owned()),
        TaskStatus::Other("blocked".to_owned())
    );
}

#[test]
fn known_statuses_round_trip_from_wire_values() {
    assert_eq!(TaskStatus::from("todo".to_owned()), TaskStatus::Todo);
    assert_eq!(TaskStatus::from("in_progress".to_owned()), TaskStatus::InProgress);
    assert_eq!(TaskStatus::from("done".to_owned()), TaskStatus::Done);
}

#[test]
fn unknown_priority_keeps_its_label() {
    let priority = Priority::from("urgent!!".to_owned());
    assert_eq!(priority, Priority::Other("urgent!!".to_owned()));
    assert_eq!(priority.label(), "urgent!!");
}

// =============================================================
// Contact / deal decoding
// =============================================================

#[test]
fn contact_email_is_optional() {
    let contact: Contact = serde_json::from_value(serde_json::json!({
        "_id": "c-1",
        "name": "Ada"
    }))
    .expect("contact");
    assert!(contact.email.is_none());
}

#[test]
fn deal_accepts_title_as_name() {
    let deal: Deal = serde_json::from_value(serde_json::json!({
        "_id": "d-1",
        "title": "Acme renewal",
        "value": 12500.0,
        "stage": "negotiation"
    }))
    .expect("deal");
    assert_eq!(deal.name, "Acme renewal");
    assert_eq!(deal.value, Some(12500.0));
    assert_eq!(deal.stage.as_deref(), Some("negotiation"));
}

#[test]
fn deal_value_and_stage_are_optional() {
    let deal: Deal = serde_json::from_value(serde_json::json!({
        "id": "d-2",
        "name": "Walk-in"
    }))
    .expect("deal");
    assert!(deal.value.is_none());
    assert!(deal.stage.is_none());
}
