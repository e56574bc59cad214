//! Task list cache and modal-form state for the task view.
//!
//! DESIGN
//! ======
//! The list mirrors the server: it is replaced wholesale on load and only
//! patched after a call has succeeded, via [`TasksState::apply`]. Nothing
//! here talks to the network, so every transition is testable without a
//! reactive runtime.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{Task, TaskDraft};
use crate::util::due_date;

/// Whether the modal creates a task or edits an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    /// Editing the task with this identifier.
    Edit { id: String },
}

/// Open add/edit dialog and its form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskModal {
    pub mode: ModalMode,
    pub draft: TaskDraft,
}

impl TaskModal {
    /// Empty form for a new task.
    #[must_use]
    pub fn create() -> Self {
        Self { mode: ModalMode::Create, draft: TaskDraft::default() }
    }

    /// Form pre-filled from `task`; the due date is cut to `datetime-local` form.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            mode: ModalMode::Edit { id: task.id.clone() },
            draft: TaskDraft {
                name: task.name.clone(),
                description: task.description.clone(),
                due_date: due_date::input_value(&task.due_date),
            },
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Add Task",
            ModalMode::Edit { .. } => "Edit Task",
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            ModalMode::Create => "Save",
            ModalMode::Edit { .. } => "Update",
        }
    }
}

/// A server-confirmed change to mirror locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskChange {
    /// Full list from `GET /tasks`.
    Loaded(Vec<Task>),
    /// Record returned by a create call.
    Created(Task),
    /// Record returned by an update of the task selected as `id`.
    Updated { id: String, task: Task },
    /// Identifier of a deleted task.
    Deleted(String),
}

/// Task view state: cached list plus the optional open modal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub modal: Option<TaskModal>,
}

impl TasksState {
    /// Patch the cached list with a confirmed change.
    pub fn apply(&mut self, change: TaskChange) {
        match change {
            TaskChange::Loaded(items) => self.items = items,
            TaskChange::Created(task) => self.items.push(task),
            TaskChange::Updated { id, task } => {
                if let Some(slot) = self.items.iter_mut().find(|t| t.id == id) {
                    *slot = task;
                }
            }
            TaskChange::Deleted(id) => self.items.retain(|t| t.id != id),
        }
    }

    pub fn open_create(&mut self) {
        self.modal = Some(TaskModal::create());
    }

    pub fn open_edit(&mut self, task: &Task) {
        self.modal = Some(TaskModal::edit(task));
    }

    /// Close the modal, dropping its draft and selection.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Mutate the open modal's draft; ignored when no modal is open.
    pub fn edit_draft(&mut self, f: impl FnOnce(&mut TaskDraft)) {
        if let Some(modal) = self.modal.as_mut() {
            f(&mut modal.draft);
        }
    }

    #[cfg(test)]
    pub(crate) fn find(&self, id: &str) -> Option<&Task> {
        self.items.iter().find(|t| t.id == id)
    }
}
