//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data wrapped in `RwSignal`s by the pages, keeping
//! transitions testable without a reactive runtime.

pub mod tasks;
