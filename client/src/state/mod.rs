//! Client-side state held in Leptos signals and provided through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `notice` are app-wide and provided once by `app::App`; `quiz`
//! and `request` are owned by individual pages.

pub mod notice;
pub mod quiz;
pub mod request;
pub mod session;
