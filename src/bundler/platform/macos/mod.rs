//! macOS packaging targets.

pub mod mpkg;
