//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome, the session gate and shared resume
//! widgets, reading shared state from Leptos context providers.

pub mod footer;
pub mod navbar;
pub mod report_card;
pub mod require_session;
pub mod resume_drop;
pub mod toast_stack;
