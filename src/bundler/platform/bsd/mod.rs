//! BSD and generic Unix packaging targets.

pub mod pkg;
