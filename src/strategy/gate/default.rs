use crate::{
    gate::{CaseGate, ChainView, GateDecision},
    outcome::SkipReason,
};

/// The default [`CaseGate`]: skip once the current group or its immediate
/// parent has a failed case.
///
/// The check is exactly one level deep. A failure in a grandparent group
/// does not reach a grandchild group directly; it only suppresses the cases
/// of the groups immediately below it. This models "this sub-scenario
/// depends on the group directly containing it", not the whole suite tree,
/// and it is a fixed contract of this gate, not an approximation of a deeper
/// recursion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinearGate;

impl CaseGate for LinearGate {
    fn evaluate(&self, view: &dyn ChainView) -> GateDecision {
        if view.group_failed() {
            return GateDecision::Skip(SkipReason::GroupFailed);
        }
        if view.parent_failed() {
            return GateDecision::Skip(SkipReason::ParentGroupFailed);
        }
        GateDecision::Run
    }
}
