use crate::gate::{CaseGate, ChainView, GateDecision};

/// A [`CaseGate`] that never skips.
///
/// Every case runs regardless of earlier failures. This is the ungated
/// equivalent of a plain ordered suite.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoGate;

impl CaseGate for NoGate {
    fn evaluate(&self, _: &dyn ChainView) -> GateDecision {
        GateDecision::Run
    }
}
