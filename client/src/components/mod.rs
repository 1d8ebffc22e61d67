//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the auth dialog while reading/writing
//! shared state from Leptos context providers.

pub mod hero;
pub mod login_modal;
pub mod navbar;
