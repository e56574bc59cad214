//! Async page actions.
//!
//! ARCHITECTURE
//! ============
//! Pages gather form input and spawn these flows; the flows talk to the
//! backend traits and return what the page should render. Keeping them free
//! of signals lets tests drive them with in-memory backends.

pub mod auth;
pub mod tasks;
