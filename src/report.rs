use std::{
    process::{ExitCode, Termination},
    time::Duration,
};

use crate::{formatter::FormatEvent, outcome::CaseOutcome};

/// The outcomes of a single group's direct cases, in execution order.
pub type GroupOutcomes<'t> = Vec<(&'t str, CaseOutcome)>;

/// Per-group outcomes for a whole run, in execution order.
///
/// Nested groups appear as their own entries after their parent.
pub type SuiteOutcomes<'t> = Vec<(&'t str, GroupOutcomes<'t>)>;

#[derive(Debug)]
#[non_exhaustive]
pub struct SuiteReport<'t, FmtError: 't> {
    pub outcomes: SuiteOutcomes<'t>,
    pub duration: Duration,
    pub fmt_errors: Vec<(FormatEvent, FmtError)>,
}

impl<'t, FmtError> SuiteReport<'t, FmtError> {
    fn count(&self, pred: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .flat_map(|(_, cases)| cases.iter())
            .filter(|(_, outcome)| pred(outcome))
            .count()
    }

    pub fn passed(&self) -> usize {
        self.count(CaseOutcome::passed)
    }

    pub fn failed(&self) -> usize {
        self.count(CaseOutcome::failed)
    }

    pub fn skipped(&self) -> usize {
        self.count(CaseOutcome::skipped)
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.has_failures() {
            true => ExitCode::FAILURE,
            false => ExitCode::SUCCESS,
        }
    }
}

impl<'t, FmtError> Termination for SuiteReport<'t, FmtError> {
    fn report(self) -> ExitCode {
        self.exit_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{CaseFailure, CaseStatus, SkipReason};

    fn outcome(status: CaseStatus) -> CaseOutcome {
        CaseOutcome {
            status,
            duration: Duration::ZERO,
        }
    }

    fn report<'t>(outcomes: SuiteOutcomes<'t>) -> SuiteReport<'t, ()> {
        SuiteReport {
            outcomes,
            duration: Duration::ZERO,
            fmt_errors: Vec::new(),
        }
    }

    #[test]
    fn counts_span_all_groups() {
        let report = report(vec![
            (
                "a",
                vec![
                    ("a1", outcome(CaseStatus::Passed)),
                    (
                        "a2",
                        outcome(CaseStatus::Failed(CaseFailure::Error("nope".into()))),
                    ),
                ],
            ),
            (
                "b",
                vec![(
                    "b1",
                    outcome(CaseStatus::Skipped {
                        reason: SkipReason::ParentGroupFailed,
                    }),
                )],
            ),
        ]);

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(report.has_failures());
    }

    #[test]
    fn clean_report_has_no_failures() {
        let report = report(vec![("a", vec![("a1", outcome(CaseStatus::Passed))])]);

        assert!(!report.has_failures());
        assert_eq!(report.skipped(), 0);
    }
}
