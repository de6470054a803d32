//! Linux packaging targets.

pub mod dpkg;
