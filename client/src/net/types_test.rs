use super::*;

fn make_task() -> Task {
    Task {
        id: "t-1".to_owned(),
        name: "Write report".to_owned(),
        description: "Quarterly numbers".to_owned(),
        due_date: "2025-03-01T09:30:00.000Z".to_owned(),
    }
}

// =============================================================
// Task
// =============================================================

#[test]
fn task_deserializes_remote_field_names() {
    let json = serde_json::json!({
        "_id": "t-1",
        "taskName": "Write report",
        "description": "Quarterly numbers",
        "dueDate": "2025-03-01T09:30:00.000Z",
        "__v": 0
    });
    let task: Task = serde_json::from_value(json).unwrap();
    assert_eq!(task, make_task());
}

#[test]
fn task_missing_optional_fields_default_to_empty() {
    let json = serde_json::json!({ "_id": "t-2", "taskName": "Call Bob" });
    let task: Task = serde_json::from_value(json).unwrap();
    assert_eq!(task.description, "");
    assert_eq!(task.due_date, "");
}

#[test]
fn task_null_optional_fields_decode_as_empty() {
    let json = serde_json::json!({
        "_id": "t-3",
        "taskName": "Null fields",
        "description": null,
        "dueDate": null
    });
    let task: Task = serde_json::from_value(json).unwrap();
    assert_eq!(task.description, "");
    assert_eq!(task.due_date, "");
}

#[test]
fn task_without_id_is_rejected() {
    let json = serde_json::json!({ "taskName": "No id" });
    assert!(serde_json::from_value::<Task>(json).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn task_draft_serializes_remote_field_names() {
    let draft = TaskDraft {
        name: "Write report".to_owned(),
        description: "Quarterly numbers".to_owned(),
        due_date: "2025-03-01T09:30".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&draft).unwrap(),
        serde_json::json!({
            "taskName": "Write report",
            "description": "Quarterly numbers",
            "dueDate": "2025-03-01T09:30"
        })
    );
}

#[test]
fn signup_request_serializes_all_fields() {
    let req = SignupRequest {
        email: "a@b.com".to_owned(),
        password: "hunter22".to_owned(),
        name: "Ann".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "password": "hunter22", "name": "Ann" })
    );
}

// =============================================================
// Responses
// =============================================================

#[test]
fn login_response_token_and_message_are_optional() {
    let ok: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(ok.token.as_deref(), Some("abc"));
    assert!(ok.message.is_none());

    let failed: LoginResponse = serde_json::from_str(r#"{"message":"bad credentials"}"#).unwrap();
    assert!(failed.token.is_none());
    assert_eq!(failed.message.as_deref(), Some("bad credentials"));
}

#[test]
fn data_envelope_unwraps_task_list() {
    let json = serde_json::json!({ "data": [
        { "_id": "t-1", "taskName": "A", "description": "", "dueDate": "" },
        { "_id": "t-2", "taskName": "B", "description": "", "dueDate": "" }
    ]});
    let env: DataEnvelope<Vec<Task>> = serde_json::from_value(json).unwrap();
    assert_eq!(env.data.len(), 2);
    assert_eq!(env.data[1].id, "t-2");
}

#[test]
fn data_envelope_keeps_rows_with_null_description() {
    let json = serde_json::json!({ "data": [
        { "_id": "t-1", "taskName": "A", "description": null, "dueDate": "2025-01-01T00:00:00.000Z" },
        { "_id": "t-2", "taskName": "B", "description": "kept", "dueDate": "" }
    ]});
    let env: DataEnvelope<Vec<Task>> = serde_json::from_value(json).unwrap();
    assert_eq!(env.data.len(), 2);
    assert_eq!(env.data[0].description, "");
    assert_eq!(env.data[0].due_date, "2025-01-01T00:00:00.000Z");
    assert_eq!(env.data[1].description, "kept");
}

#[test]
fn data_envelope_requires_data_field() {
    let json = serde_json::json!({ "tasks": [] });
    assert!(serde_json::from_value::<DataEnvelope<Vec<Task>>>(json).is_err());
}
