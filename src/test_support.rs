use crate::{
    SuiteHarness, SuiteReport, formatter::no::NoFormatter, gate::LinearGate, panic::NoPanicHandler,
    suite::Suite,
};

/// A quiet harness for the crate's own tests: gated, but without panic
/// capture or output.
pub(crate) fn harness<'t>(
    suite: &'t Suite,
) -> SuiteHarness<'t, (), LinearGate, NoPanicHandler, NoFormatter> {
    SuiteHarness {
        suite,
        gate: LinearGate,
        panic_handler: NoPanicHandler,
        formatter: NoFormatter,
    }
}

/// The statuses of a group's cases as short strings, for compact assertions.
pub(crate) fn statuses<FmtError>(report: &SuiteReport<'_, FmtError>, group: &str) -> Vec<&'static str> {
    report
        .outcomes
        .iter()
        .filter(|(name, _)| *name == group)
        .flat_map(|(_, cases)| cases.iter())
        .map(|(_, outcome)| match &outcome.status {
            crate::outcome::CaseStatus::Passed => "passed",
            crate::outcome::CaseStatus::Failed(_) => "failed",
            crate::outcome::CaseStatus::Skipped { .. } => "skipped",
        })
        .collect()
}
