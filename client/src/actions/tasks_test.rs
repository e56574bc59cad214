use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::error::ApiError;
use crate::net::types::{Task, TaskDraft};
use crate::state::tasks::TasksState;

// =============================================================
// Fakes
// =============================================================

/// Records every call as `(method, token, id)` and answers from canned data.
#[derive(Default)]
struct FakeTasks {
    fail: bool,
    listed: Vec<Task>,
    calls: RefCell<Vec<(&'static str, Option<String>, Option<String>)>>,
}

impl FakeTasks {
    fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    fn record(&self, method: &'static str, token: Option<&str>, id: Option<&str>) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push((method, token.map(str::to_owned), id.map(str::to_owned)));
        if self.fail {
            return Err(ApiError::Transport("connection refused".to_owned()));
        }
        Ok(())
    }
}

fn from_draft(id: &str, draft: &TaskDraft) -> Task {
    Task {
        id: id.to_owned(),
        name: draft.name.clone(),
        description: draft.description.clone(),
        due_date: format!("{}:00.000Z", draft.due_date),
    }
}

impl TaskBackend for FakeTasks {
    async fn list_tasks(&self, token: Option<&str>) -> Result<Vec<Task>, ApiError> {
        self.record("list", token, None)?;
        Ok(self.listed.clone())
    }

    async fn create_task(&self, token: Option<&str>, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.record("create", token, None)?;
        Ok(from_draft("created-1", draft))
    }

    async fn update_task(&self, token: Option<&str>, id: &str, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.record("update", token, Some(id))?;
        Ok(from_draft(id, draft))
    }

    async fn delete_task(&self, token: Option<&str>, id: &str) -> Result<(), ApiError> {
        self.record("delete", token, Some(id))
    }
}

struct FixedStore(RefCell<Option<String>>);

impl FixedStore {
    fn with(token: &str) -> Self {
        Self(RefCell::new(Some(token.to_owned())))
    }

    fn empty() -> Self {
        Self(RefCell::new(None))
    }
}

impl TokenStore for FixedStore {
    fn token(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }
}

fn task(id: &str) -> Task {
    Task {
        id: id.to_owned(),
        name: format!("Task {id}"),
        description: String::new(),
        due_date: "2025-01-01T10:00:00.000Z".to_owned(),
    }
}

fn state_with(ids: &[&str]) -> TasksState {
    TasksState { items: ids.iter().map(|id| task(id)).collect(), modal: None }
}

fn draft(name: &str) -> TaskDraft {
    TaskDraft {
        name: name.to_owned(),
        description: "desc".to_owned(),
        due_date: "2025-06-01T08:00".to_owned(),
    }
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_replaces_cache_with_server_list() {
    let backend = FakeTasks { listed: vec![task("x"), task("y")], ..FakeTasks::default() };
    let mut state = state_with(&["stale"]);

    let change = block_on(load_tasks(&backend, &FixedStore::with("t")));
    state.apply(change.unwrap());

    assert_eq!(state.items, vec![task("x"), task("y")]);
}

#[test]
fn load_failure_yields_no_change() {
    let change = block_on(load_tasks(&FakeTasks::failing(), &FixedStore::with("t")));
    assert!(change.is_none());
}

// =============================================================
// Token injection
// =============================================================

#[test]
fn calls_carry_token_read_at_call_time() {
    let backend = FakeTasks::default();
    let store = FixedStore::empty();

    let _ = block_on(load_tasks(&backend, &store));
    store.set_token("fresh");
    let _ = block_on(delete_task(&backend, &store, "a"));

    let calls = backend.calls.borrow();
    assert_eq!(calls[0], ("list", None, None));
    assert_eq!(calls[1], ("delete", Some("fresh".to_owned()), Some("a".to_owned())));
}

// =============================================================
// Save
// =============================================================

#[test]
fn create_appends_exactly_one_task() {
    let backend = FakeTasks::default();
    let mut state = state_with(&["a", "b"]);
    state.open_create();
    state.edit_draft(|d| *d = draft("New"));

    let modal = state.modal.clone().unwrap();
    let change = block_on(save_task(&backend, &FixedStore::with("t"), &modal)).unwrap();
    state.apply(change);

    assert_eq!(state.items.len(), 3);
    assert!(state.find("created-1").is_some());
    assert_eq!(backend.calls.borrow()[0].0, "create");
}

#[test]
fn update_replaces_selected_task_with_response() {
    let backend = FakeTasks::default();
    let mut state = state_with(&["a", "b", "c"]);
    let selected = state.items[1].clone();
    state.open_edit(&selected);
    state.edit_draft(|d| d.name = "Renamed".to_owned());

    let modal = state.modal.clone().unwrap();
    let change = block_on(save_task(&backend, &FixedStore::with("t"), &modal)).unwrap();
    state.apply(change);

    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[1].id, "b");
    assert_eq!(state.items[1].name, "Renamed");
    assert_eq!(backend.calls.borrow()[0], ("update", Some("t".to_owned()), Some("b".to_owned())));
}

#[test]
fn failed_save_leaves_list_and_modal_intact() {
    let mut state = state_with(&["a"]);
    state.open_create();
    state.edit_draft(|d| *d = draft("Kept"));
    let before = state.clone();

    let modal = state.modal.clone().unwrap();
    let change = block_on(save_task(&FakeTasks::failing(), &FixedStore::with("t"), &modal));

    assert!(change.is_none());
    assert_eq!(state, before);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_identifier() {
    let mut state = state_with(&["a", "b"]);

    let change = block_on(delete_task(&FakeTasks::default(), &FixedStore::with("t"), "a")).unwrap();
    state.apply(change);

    assert_eq!(state.items.len(), 1);
    assert!(state.find("a").is_none());
}

#[test]
fn failed_delete_yields_no_change() {
    let change = block_on(delete_task(&FakeTasks::failing(), &FixedStore::with("t"), "a"));
    assert!(change.is_none());
}
