use std::{panic::RefUnwindSafe, time::Duration, time::Instant};

use crate::{
    SuiteReport,
    formatter::{
        FmtCaseOutcome, FmtCaseStart, FmtGroupStart, FmtRunInit, FmtRunOutcomes, FmtRunStart,
        FormatEvent, SuiteFormatter,
    },
    gate::{CaseGate, ChainState, GateDecision},
    outcome::{CaseOutcome, CaseStatus},
    panic::CasePanicHandler,
    report::SuiteOutcomes,
    suite::{Group, Suite},
};

use super::PushOnError;

pub struct SuiteHarness<'t, Extra, Gate, PanicHandler, Formatter> {
    pub(crate) suite: &'t Suite<Extra>,
    pub(crate) gate: Gate,
    pub(crate) panic_handler: PanicHandler,
    pub(crate) formatter: Formatter,
}

impl<
    't,
    Extra: RefUnwindSafe,
    Gate: CaseGate,
    PanicHandler: CasePanicHandler<Extra>,
    Formatter: SuiteFormatter<'t, Extra>,
> SuiteHarness<'t, Extra, Gate, PanicHandler, Formatter>
{
    /// Run the whole suite and collect a report.
    ///
    /// Groups run in declaration order, each group's cases strictly one
    /// after another, then its nested groups. Failures never abort the run;
    /// they feed the gate, which decides case by case whether the remaining
    /// bodies still execute.
    pub fn run(mut self) -> SuiteReport<'t, Formatter::Error> {
        let now = Instant::now();
        let suite = self.suite;
        let mut fmt_errors = Vec::new();

        fmt_errors.push_on_error(
            FormatEvent::RunInit,
            self.formatter.fmt_run_init(FmtRunInit { suite }.into()),
        );
        fmt_errors.push_on_error(
            FormatEvent::RunStart,
            self.formatter.fmt_run_start(
                FmtRunStart {
                    groups: suite.groups.len(),
                    cases: suite.case_count(),
                }
                .into(),
            ),
        );

        let mut outcomes = Vec::with_capacity(suite.groups.len());
        for group in &suite.groups {
            self.run_group(group, false, 0, &mut outcomes, &mut fmt_errors);
        }

        let duration = now.elapsed();
        fmt_errors.push_on_error(
            FormatEvent::RunOutcomes,
            self.formatter.fmt_run_outcomes(
                FmtRunOutcomes {
                    outcomes: &outcomes,
                    duration,
                }
                .into(),
            ),
        );

        SuiteReport {
            outcomes,
            duration,
            fmt_errors,
        }
    }

    fn run_group(
        &mut self,
        group: &'t Group<Extra>,
        parent_failed: bool,
        depth: usize,
        outcomes: &mut SuiteOutcomes<'t>,
        fmt_errors: &mut Vec<(FormatEvent, Formatter::Error)>,
    ) {
        fmt_errors.push_on_error(
            FormatEvent::GroupStart,
            self.formatter
                .fmt_group_start(FmtGroupStart { group, depth }.into()),
        );

        // Only this group's direct cases feed the gate. Nested groups keep
        // their own flag, so a failure inside one subgroup never leaks into
        // a sibling subgroup.
        let mut group_failed = false;
        let mut cases = Vec::with_capacity(group.cases.len());
        for case in &group.cases {
            let view = ChainState {
                group_failed,
                parent_failed,
            };

            let outcome = match self.gate.evaluate(&view) {
                GateDecision::Skip(reason) => CaseOutcome {
                    status: CaseStatus::Skipped { reason },
                    duration: Duration::ZERO,
                },
                GateDecision::Run => {
                    fmt_errors.push_on_error(
                        FormatEvent::CaseStart,
                        self.formatter.fmt_case_start(
                            FmtCaseStart {
                                meta: &case.meta,
                                depth,
                            }
                            .into(),
                        ),
                    );

                    let case_start = Instant::now();
                    let status = self.panic_handler.handle(|| case.call(), &case.meta);
                    let duration = case_start.elapsed();

                    group_failed |= status.failed();
                    CaseOutcome { status, duration }
                }
            };

            fmt_errors.push_on_error(
                FormatEvent::CaseOutcome,
                self.formatter.fmt_case_outcome(
                    FmtCaseOutcome {
                        meta: &case.meta,
                        outcome: &outcome,
                        depth,
                    }
                    .into(),
                ),
            );

            cases.push((case.meta.name.as_ref(), outcome));
        }
        outcomes.push((group.name.as_ref(), cases));

        // A nested group sees only its direct parent's failures. The
        // grandparent chain is cut off here on purpose: if this group was
        // itself skipped wholesale, its cases are skipped, not failed, and
        // the subgroups below it run on their own merits.
        for sub in &group.groups {
            self.run_group(sub, group_failed, depth + 1, outcomes, fmt_errors);
        }
    }
}

impl<'t, Extra, Gate, PanicHandler, Formatter>
    SuiteHarness<'t, Extra, Gate, PanicHandler, Formatter>
{
    pub fn with_gate<WithGate: CaseGate>(
        self,
        gate: WithGate,
    ) -> SuiteHarness<'t, Extra, WithGate, PanicHandler, Formatter> {
        SuiteHarness {
            suite: self.suite,
            gate,
            panic_handler: self.panic_handler,
            formatter: self.formatter,
        }
    }

    pub fn with_panic_handler<WithPanicHandler: CasePanicHandler<Extra>>(
        self,
        panic_handler: WithPanicHandler,
    ) -> SuiteHarness<'t, Extra, Gate, WithPanicHandler, Formatter> {
        SuiteHarness {
            suite: self.suite,
            gate: self.gate,
            panic_handler,
            formatter: self.formatter,
        }
    }

    pub fn with_formatter<WithFormatter>(
        self,
        formatter: WithFormatter,
    ) -> SuiteHarness<'t, Extra, Gate, PanicHandler, WithFormatter> {
        SuiteHarness {
            suite: self.suite,
            gate: self.gate,
            panic_handler: self.panic_handler,
            formatter,
        }
    }
}
