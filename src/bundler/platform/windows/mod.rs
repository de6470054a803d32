//! Windows packaging targets.

pub mod exe;
