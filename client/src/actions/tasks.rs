//! Task CRUD flows for the task view.
//!
//! Every flow reads the session token from the store at call time and
//! returns the [`TaskChange`] to apply once the server confirmed it.
//! Failures are logged and yield `None`; the task view has no error surface.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::api::TaskBackend;
use crate::state::tasks::{ModalMode, TaskChange, TaskModal};
use crate::util::session::TokenStore;

/// Fetch the full list for the current session.
pub async fn load_tasks<B, S>(backend: &B, store: &S) -> Option<TaskChange>
where
    B: TaskBackend,
    S: TokenStore,
{
    let token = store.token();
    match backend.list_tasks(token.as_deref()).await {
        Ok(items) => Some(TaskChange::Loaded(items)),
        Err(e) => {
            leptos::logging::error!("Fetch error: {e}");
            None
        }
    }
}

/// Create or update from the open modal, depending on its mode.
pub async fn save_task<B, S>(backend: &B, store: &S, modal: &TaskModal) -> Option<TaskChange>
where
    B: TaskBackend,
    S: TokenStore,
{
    let token = store.token();
    let result = match &modal.mode {
        ModalMode::Create => backend
            .create_task(token.as_deref(), &modal.draft)
            .await
            .map(TaskChange::Created),
        ModalMode::Edit { id } => backend
            .update_task(token.as_deref(), id, &modal.draft)
            .await
            .map(|task| TaskChange::Updated { id: id.clone(), task }),
    };
    match result {
        Ok(change) => Some(change),
        Err(e) => {
            leptos::logging::error!("Save error: {e}");
            None
        }
    }
}

pub async fn delete_task<B, S>(backend: &B, store: &S, id: &str) -> Option<TaskChange>
where
    B: TaskBackend,
    S: TokenStore,
{
    let token = store.token();
    match backend.delete_task(token.as_deref(), id).await {
        Ok(()) => Some(TaskChange::Deleted(id.to_owned())),
        Err(e) => {
            leptos::logging::error!("Delete error: {e}");
            None
        }
    }
}
