//! Run reporting for linsuite.
//!
//! The harness reports through a [`SuiteFormatter`]: one call per lifecycle
//! event, each carrying a `Fmt*` transfer object. A formatter picks, per
//! event, an associated type that is `From` the transfer object; events it
//! does not care about map to `()` and keep the defaulted no-op method.
//!
//! Formatter errors never abort a run. The harness collects them, tagged
//! with the [`FormatEvent`] that produced them, into the final report.

use std::time::Duration;

use crate::{
    case::CaseMeta,
    outcome::CaseOutcome,
    report::SuiteOutcomes,
    suite::{Group, Suite},
};

pub mod common;
pub mod no;
pub mod pretty;

/// Which formatter call produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatEvent {
    RunInit,
    RunStart,
    GroupStart,
    CaseStart,
    CaseOutcome,
    RunOutcomes,
}

#[derive(Debug)]
pub struct FmtRunInit<'t, Extra> {
    pub suite: &'t Suite<Extra>,
}

#[derive(Debug, Clone, Copy)]
pub struct FmtRunStart {
    pub groups: usize,
    pub cases: usize,
}

#[derive(Debug)]
pub struct FmtGroupStart<'t, Extra> {
    pub group: &'t Group<Extra>,
    pub depth: usize,
}

#[derive(Debug)]
pub struct FmtCaseStart<'t, Extra> {
    pub meta: &'t CaseMeta<Extra>,
    pub depth: usize,
}

#[derive(Debug)]
pub struct FmtCaseOutcome<'t, 'o, Extra> {
    pub meta: &'t CaseMeta<Extra>,
    pub outcome: &'o CaseOutcome,
    pub depth: usize,
}

#[derive(Debug)]
pub struct FmtRunOutcomes<'t, 'o> {
    pub outcomes: &'o SuiteOutcomes<'t>,
    pub duration: Duration,
}

/// A strategy for rendering the lifecycle of a suite run.
///
/// Every method has a no-op default, so an implementation only overrides the
/// events it renders and sets the remaining associated types to `()`.
pub trait SuiteFormatter<'t, Extra: 't> {
    type Error;

    type RunInit: From<FmtRunInit<'t, Extra>>;
    fn fmt_run_init(&mut self, data: Self::RunInit) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    type RunStart: From<FmtRunStart>;
    fn fmt_run_start(&mut self, data: Self::RunStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    type GroupStart: From<FmtGroupStart<'t, Extra>>;
    fn fmt_group_start(&mut self, data: Self::GroupStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    type CaseStart: From<FmtCaseStart<'t, Extra>>;
    fn fmt_case_start(&mut self, data: Self::CaseStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    type CaseOutcome: for<'o> From<FmtCaseOutcome<'t, 'o, Extra>>;
    fn fmt_case_outcome(&mut self, data: Self::CaseOutcome) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    type RunOutcomes: for<'o> From<FmtRunOutcomes<'t, 'o>>;
    fn fmt_run_outcomes(&mut self, data: Self::RunOutcomes) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}
