//! Browser and environment helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate cookie and file-input handling from page and
//! component logic so the decisions stay testable off the browser.

pub mod cookie;
pub mod upload;
