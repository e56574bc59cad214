//! Add/edit task dialog bound to the open [`TaskModal`] draft.
//!
//! Inputs read and write the draft inside `tasks` directly, so typing never
//! rebuilds the dialog. The caller decides what submit and cancel do.
//!
//! [`TaskModal`]: crate::state::tasks::TaskModal

use leptos::prelude::*;

use crate::net::types::TaskDraft;
use crate::state::tasks::TasksState;

#[component]
pub fn TaskModalDialog(
    tasks: RwSignal<TasksState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let read = move |f: fn(&TaskDraft) -> String| {
        tasks.with(|s| s.modal.as_ref().map(|m| f(&m.draft)).unwrap_or_default())
    };
    let title = move || tasks.with(|s| s.modal.as_ref().map_or("", |m| m.title()));
    let submit_label = move || tasks.with(|s| s.modal.as_ref().map_or("", |m| m.submit_label()));

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--task" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form class="dialog__form" on:submit=on_form_submit>
                    <input
                        class="dialog__input"
                        type="text"
                        name="taskName"
                        placeholder="Enter Task Name"
                        required
                        prop:value=move || read(|d| d.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            tasks.update(|s| s.edit_draft(|d| d.name = value));
                        }
                    />
                    <input
                        class="dialog__input"
                        type="text"
                        name="description"
                        placeholder="Description"
                        required
                        prop:value=move || read(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            tasks.update(|s| s.edit_draft(|d| d.description = value));
                        }
                    />
                    <input
                        class="dialog__input"
                        type="datetime-local"
                        name="dueDate"
                        required
                        prop:value=move || read(|d| d.due_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            tasks.update(|s| s.edit_draft(|d| d.due_date = value));
                        }
                    />
                    <button class="btn btn--primary" type="submit">
                        {submit_label}
                    </button>
                    <button class="btn btn--link" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                </form>
            </div>
        </div>
    }
}
