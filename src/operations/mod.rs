//! High-level operations for the install lifecycle
//!
//! `lifecycle` owns every mutating flow (install, uninstall); `status` is the
//! read-only query. Commands wire concrete collaborators in and render what
//! comes out.

pub mod lifecycle;
pub mod status;
