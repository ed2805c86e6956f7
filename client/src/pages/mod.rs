//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and request trackers and delegates shared
//! rendering to `components`. Backend calls start and finish through
//! `action` so every page handles duplicate triggers and stale responses the
//! same way.

pub(crate) mod action;
pub mod analyse;
pub mod job_matcher;
pub mod landing;
pub mod login;
pub mod profile;
pub mod quiz;
pub mod stats;
