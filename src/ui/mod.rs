//! Terminal presentation for appstage
//!
//! User-facing output flows through `display`; the lifecycle itself never
//! prints.

pub mod display;
