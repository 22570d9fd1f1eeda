//! Dependency gating for linsuite.
//!
//! Before a case executes, the runner asks a gate whether accumulated
//! failures along the execution chain should suppress it. The gate never
//! touches the suite itself; it only sees a [`ChainView`] of the bookkeeping
//! the runner maintains, which keeps the policy testable against a fake view.
//!
//! Implement [`CaseGate`] to define a different suppression policy.

use crate::outcome::SkipReason;

mod default;
pub use default::*;

mod no;
pub use no::*;

/// Read-only view of the case states that matter for gating.
///
/// Both queries are about *direct* cases only: cases of nested groups do not
/// count towards their containing group, and sibling groups are invisible.
pub trait ChainView {
    /// Whether a case directly in the current group has already failed.
    fn group_failed(&self) -> bool;

    /// Whether a case directly in the immediate parent group has already
    /// failed. Always `false` for a root-level group.
    fn parent_failed(&self) -> bool;
}

/// What the runner should do with the next case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Execute the case body.
    Run,
    /// Record the case as skipped without invoking its body.
    Skip(SkipReason),
}

/// A strategy deciding whether a case may run.
///
/// The gate returns a decision instead of marking the case itself; the
/// runner is the only writer of case state. Decisions are never revisited;
/// a case that was skipped stays skipped.
pub trait CaseGate {
    fn evaluate(&self, view: &dyn ChainView) -> GateDecision;
}

/// The state the runner feeds to the gate for one case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainState {
    pub group_failed: bool,
    pub parent_failed: bool,
}

impl ChainView for ChainState {
    fn group_failed(&self) -> bool {
        self.group_failed
    }

    fn parent_failed(&self) -> bool {
        self.parent_failed
    }
}
