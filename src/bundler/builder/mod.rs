//! Packaging dispatch.
//!
//! - [`orchestrator`] - the [`Bundler`] dispatcher
//! - [`outcome`] - per-target results and aggregation rules
//! - [`checksum`] - artifact size and SHA-256
//! - [`tool_detection`] - external tool probes used by the packagers

mod checksum;
pub mod orchestrator;
pub mod outcome;
pub(crate) mod tool_detection;

pub use orchestrator::Bundler;
pub use outcome::{
    AggregationRule, BundledArtifact, DispatchOutcome, DispatchReport, SUCCESS_STATUS,
    TargetResult, TargetStatus, UNSUPPORTED_STATUS,
};
