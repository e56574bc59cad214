//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the task view pieces; they take signals and callbacks
//! from the page instead of reaching for context.

pub mod task_modal;
pub mod task_table;
