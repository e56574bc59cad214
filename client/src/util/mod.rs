//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser glue (`localStorage`, locale formatting) lives here so pages and
//! components never touch web-sys directly.

pub mod due_date;
pub mod session;
pub mod storage;
