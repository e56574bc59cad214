//! Task list table with per-row edit and delete actions.

use leptos::prelude::*;

use crate::net::types::Task;
use crate::util::due_date;

/// Table of `items` in server order, numbered from 1.
#[component]
pub fn TaskTable(
    #[prop(into)] items: Signal<Vec<Task>>,
    on_edit: Callback<Task>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="task-table">
            <thead>
                <tr>
                    <th>"No"</th>
                    <th>"Date & Time"</th>
                    <th>"Task"</th>
                    <th>"Description"</th>
                    <th class="task-table__actions">"Action"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    items
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, task)| {
                            view! { <TaskRow index=index task=task on_edit=on_edit on_delete=on_delete/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn TaskRow(index: usize, task: Task, on_edit: Callback<Task>, on_delete: Callback<String>) -> impl IntoView {
    let when = due_date::display(&task.due_date);
    let id = task.id.clone();
    let name = task.name.clone();
    let description = task.description.clone();

    view! {
        <tr class="task-table__row">
            <td>{index + 1}</td>
            <td>{when}</td>
            <td>{name}</td>
            <td>{description}</td>
            <td class="task-table__actions">
                <button class="btn btn--icon" title="Edit" on:click=move |_| on_edit.run(task.clone())>
                    "✎"
                </button>
                <button
                    class="btn btn--icon btn--danger"
                    title="Delete"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
