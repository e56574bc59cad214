//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped signals and delegates async work to
//! `actions` and rendering details to `components`.

pub mod login;
pub mod signup;
pub mod tasks;
