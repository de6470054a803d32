//! Per-target results and their reduction into one verdict.

use crate::bundler::{Error, PackageType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Status code of a successful target.
pub const SUCCESS_STATUS: i32 = 0;

/// Status code of an unsupported (or otherwise codeless) target.
pub const UNSUPPORTED_STATUS: i32 = -1;

/// A package produced by a packager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundledArtifact {
    /// Target that produced it.
    pub package_type: PackageType,
    /// Every file or directory the packager reported.
    pub paths: Vec<PathBuf>,
    /// Total size of all paths, in bytes.
    pub size: u64,
    /// Hex SHA-256 of the first path.
    pub checksum: String,
}

/// What happened to one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TargetStatus {
    /// The packager produced an artifact.
    Built {
        /// The artifact.
        artifact: BundledArtifact,
    },
    /// The target has no implementation.
    Unsupported,
    /// The packager ran and failed.
    Failed {
        /// Status code, e.g. the exit code of the external tool.
        code: i32,
        /// Human-readable reason.
        reason: String,
    },
}

impl TargetStatus {
    /// Maps a packager error onto a status.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::UnsupportedFormat(_) => TargetStatus::Unsupported,
            other => TargetStatus::Failed {
                code: other.status_code(),
                reason: other.to_string(),
            },
        }
    }

    /// Integer status code: `0` for built, `-1` for unsupported.
    pub fn code(&self) -> i32 {
        match self {
            TargetStatus::Built { .. } => SUCCESS_STATUS,
            TargetStatus::Unsupported => UNSUPPORTED_STATUS,
            TargetStatus::Failed { code, .. } => *code,
        }
    }

    /// Whether the target produced an artifact.
    pub fn is_built(&self) -> bool {
        matches!(self, TargetStatus::Built { .. })
    }
}

/// One target's status from a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetResult {
    /// The target.
    pub package_type: PackageType,
    /// Its status.
    #[serde(flatten)]
    pub status: TargetStatus,
}

impl TargetResult {
    /// Creates a result.
    pub fn new(package_type: PackageType, status: TargetStatus) -> Self {
        Self {
            package_type,
            status,
        }
    }

    /// Shorthand for `self.status.code()`.
    pub fn code(&self) -> i32 {
        self.status.code()
    }
}

/// How target results are reduced to a [`DispatchOutcome`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregationRule {
    /// Failure if any target did not build.
    #[default]
    AnyFailure,
    /// Sum every status code; success only when the sum is exactly zero.
    ///
    /// Codes of opposite sign cancel, so a failing target can be masked.
    SumOfCodes,
}

impl AggregationRule {
    /// Reduces `results` to an outcome.
    pub fn aggregate(&self, results: &[TargetResult]) -> DispatchOutcome {
        let success = match self {
            AggregationRule::AnyFailure => results.iter().all(|r| r.status.is_built()),
            AggregationRule::SumOfCodes => {
                results.iter().map(|r| i64::from(r.code())).sum::<i64>() == 0
            }
        };

        if success {
            DispatchOutcome::Success
        } else {
            DispatchOutcome::Failure
        }
    }

    /// Name as accepted on the command line and in `packaging.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationRule::AnyFailure => "any-failure",
            AggregationRule::SumOfCodes => "sum-of-codes",
        }
    }
}

impl std::str::FromStr for AggregationRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any-failure" => Ok(AggregationRule::AnyFailure),
            "sum-of-codes" => Ok(AggregationRule::SumOfCodes),
            other => Err(format!(
                "unknown aggregation rule '{other}' (expected any-failure or sum-of-codes)"
            )),
        }
    }
}

/// Overall verdict of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchOutcome {
    /// Every target counted as successful.
    Success,
    /// At least one target counted as failed.
    Failure,
}

impl DispatchOutcome {
    /// `0` on success, `-1` on failure.
    pub fn code(&self) -> i32 {
        match self {
            DispatchOutcome::Success => SUCCESS_STATUS,
            DispatchOutcome::Failure => UNSUPPORTED_STATUS,
        }
    }

    /// Returns true on success.
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchOutcome::Success)
    }
}

/// Everything a dispatch produced.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    source_directory: PathBuf,
    aggregation: AggregationRule,
    outcome: DispatchOutcome,
    results: Vec<TargetResult>,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl DispatchReport {
    /// Builds a report, deriving the outcome from `results`.
    pub fn new(
        source_directory: PathBuf,
        aggregation: AggregationRule,
        results: Vec<TargetResult>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let outcome = aggregation.aggregate(&results);
        Self {
            source_directory,
            aggregation,
            outcome,
            results,
            started_at,
            finished_at,
        }
    }

    /// The aggregate verdict.
    pub fn outcome(&self) -> DispatchOutcome {
        self.outcome
    }

    /// Per-target results, in dispatch order.
    pub fn results(&self) -> &[TargetResult] {
        &self.results
    }

    /// Result for a single target.
    pub fn result(&self, package_type: PackageType) -> Option<&TargetResult> {
        self.results.iter().find(|r| r.package_type == package_type)
    }

    /// Rule used to derive the outcome.
    pub fn aggregation(&self) -> AggregationRule {
        self.aggregation
    }

    /// Source directory the packagers were pointed at.
    pub fn source_directory(&self) -> &std::path::Path {
        &self.source_directory
    }

    /// When the dispatch started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the dispatch finished.
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }
}
