//! Task management page: list, add, edit and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in one `RwSignal<TasksState>`. Remote calls run in
//! `spawn_local` and patch the list only after the server confirms; failures
//! are logged by the action layer and leave the view untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::tasks::{delete_task, load_tasks, save_task};
use crate::components::task_modal::TaskModalDialog;
use crate::components::task_table::TaskTable;
use crate::net::api::ApiClient;
use crate::net::types::Task;
use crate::state::tasks::TasksState;
use crate::util::session::BrowserTokenStore;

#[component]
pub fn TasksPage() -> impl IntoView {
    let tasks = RwSignal::new(TasksState::default());
    let items = Memo::new(move |_| tasks.with(|s| s.items.clone()));

    // Effects only run in the browser, so this fetches once after hydration.
    Effect::new(move || {
        spawn_local(async move {
            if let Some(change) = load_tasks(&ApiClient::default(), &BrowserTokenStore).await {
                tasks.update(|s| s.apply(change));
            }
        });
    });

    let on_edit = Callback::new(move |task: Task| tasks.update(|s| s.open_edit(&task)));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            if let Some(change) = delete_task(&ApiClient::default(), &BrowserTokenStore, &id).await {
                tasks.update(|s| s.apply(change));
            }
        });
    });

    let on_submit = Callback::new(move |()| {
        let Some(modal) = tasks.with_untracked(|s| s.modal.clone()) else {
            return;
        };
        spawn_local(async move {
            if let Some(change) = save_task(&ApiClient::default(), &BrowserTokenStore, &modal).await {
                tasks.update(|s| {
                    s.apply(change);
                    s.close_modal();
                });
            }
        });
    });

    let on_cancel = Callback::new(move |()| tasks.update(TasksState::close_modal));

    view! {
        <div class="tasks-page">
            <header class="tasks-page__header">
                <h1>"Tasks Management"</h1>
                <button class="btn btn--primary" on:click=move |_| tasks.update(TasksState::open_create)>
                    "＋ Add Task"
                </button>
            </header>

            <div class="tasks-page__table">
                <TaskTable items=items on_edit=on_edit on_delete=on_delete/>
            </div>

            <Show when=move || tasks.with(|s| s.modal.is_some())>
                <TaskModalDialog tasks=tasks on_submit=on_submit on_cancel=on_cancel/>
            </Show>
        </div>
    }
}
