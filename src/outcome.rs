use std::{fmt::Display, time::Duration};

use crate::case::CaseResult;

/// The recorded result of a single case.
#[derive(Debug)]
#[non_exhaustive]
pub struct CaseOutcome {
    pub status: CaseStatus,
    pub duration: Duration,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }

    pub fn skipped(&self) -> bool {
        self.status.skipped()
    }
}

/// The terminal state of a case.
///
/// A case that has not run yet has no status; the runner records a status
/// exactly once per case and never revisits it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaseStatus {
    Passed,
    Failed(CaseFailure),
    Skipped { reason: SkipReason },
}

impl CaseStatus {
    pub fn passed(&self) -> bool {
        matches!(self, CaseStatus::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self, CaseStatus::Failed(_))
    }

    pub fn skipped(&self) -> bool {
        matches!(self, CaseStatus::Skipped { .. })
    }
}

/// Why a case failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaseFailure {
    /// The case body returned an error.
    Error(String),
    /// The case body panicked outside any of its own error handling.
    Panicked(String),
}

/// Why a case was skipped instead of executed.
///
/// A skip is not a failure. It is a deliberate non-execution and stays
/// distinguishable from failures in every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// An earlier case in the same group already failed.
    GroupFailed,
    /// A case in the immediate parent group already failed.
    ParentGroupFailed,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::GroupFailed => write!(f, "earlier case failed in this group"),
            SkipReason::ParentGroupFailed => write!(f, "case failed in the parent group"),
        }
    }
}

impl From<CaseResult> for CaseStatus {
    fn from(value: CaseResult) -> Self {
        match value.0 {
            Ok(_) => CaseStatus::Passed,
            Err(err) => CaseStatus::Failed(CaseFailure::Error(err)),
        }
    }
}
