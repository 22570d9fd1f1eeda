use std::io;

use crate::{
    formatter::{
        FmtCaseOutcome, FmtGroupStart, FmtRunOutcomes, FmtRunStart, SuiteFormatter,
        common::color::{ColorSetting, SupportsColor, colors::*},
    },
    outcome::{CaseFailure, CaseStatus},
};

/// A mocha-flavored tree formatter.
///
/// Groups become indented headings, cases become `✓`/`✗`/`-` lines with the
/// skip reason spelled out, and the run ends with a failures section and a
/// summary line.
#[derive(Debug)]
pub struct PrettyFormatter<W: io::Write> {
    target: W,
    color_setting: ColorSetting,
}

impl Default for PrettyFormatter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            color_setting: ColorSetting::default(),
        }
    }
}

impl<W: io::Write> PrettyFormatter<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        target: WithTarget,
    ) -> PrettyFormatter<WithTarget> {
        PrettyFormatter {
            target,
            color_setting: self.color_setting,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        PrettyFormatter {
            color_setting: color_setting.into(),
            ..self
        }
    }
}

impl<W: io::Write + SupportsColor> PrettyFormatter<W> {
    /// Return whether this formatter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

pub struct GroupHeading<'t> {
    pub name: &'t str,
    pub depth: usize,
}

impl<'t, Extra> From<FmtGroupStart<'t, Extra>> for GroupHeading<'t> {
    fn from(value: FmtGroupStart<'t, Extra>) -> Self {
        Self {
            name: value.group.name.as_ref(),
            depth: value.depth,
        }
    }
}

pub struct CaseLine<'t> {
    pub name: &'t str,
    pub depth: usize,
    pub status: CaseStatus,
}

impl<'t, 'o, Extra> From<FmtCaseOutcome<'t, 'o, Extra>> for CaseLine<'t> {
    fn from(value: FmtCaseOutcome<'t, 'o, Extra>) -> Self {
        Self {
            name: value.meta.name.as_ref(),
            depth: value.depth,
            status: value.outcome.status.clone(),
        }
    }
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RunSummary<'t> {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration: std::time::Duration,
    pub failures: Vec<FailureLine<'t>>,
}

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FailureLine<'t> {
    pub group: &'t str,
    pub name: &'t str,
    pub failure: CaseFailure,
}

impl<'t, 'o> From<FmtRunOutcomes<'t, 'o>> for RunSummary<'t> {
    fn from(value: FmtRunOutcomes<'t, 'o>) -> Self {
        let cases = || {
            value
                .outcomes
                .iter()
                .flat_map(|(_, cases)| cases.iter().map(|(_, outcome)| outcome))
        };

        Self {
            passed: cases().filter(|outcome| outcome.passed()).count(),
            failed: cases().filter(|outcome| outcome.failed()).count(),
            skipped: cases().filter(|outcome| outcome.skipped()).count(),
            duration: value.duration,
            failures: value
                .outcomes
                .iter()
                .flat_map(|(group, cases)| {
                    cases.iter().filter_map(|(name, outcome)| {
                        let CaseStatus::Failed(failure) = &outcome.status else {
                            return None;
                        };

                        Some(FailureLine {
                            group,
                            name,
                            failure: failure.clone(),
                        })
                    })
                })
                .collect(),
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth + 1)
}

impl<'t, Extra: 't, W: io::Write + SupportsColor> SuiteFormatter<'t, Extra>
    for PrettyFormatter<W>
{
    type Error = io::Error;

    type RunStart = FmtRunStart;
    fn fmt_run_start(&mut self, data: Self::RunStart) -> Result<(), Self::Error> {
        match data.cases {
            1 => writeln!(self.target, "\nrunning 1 case"),
            cases => writeln!(
                self.target,
                "\nrunning {cases} cases in {} groups",
                data.groups
            ),
        }
    }

    type GroupStart = GroupHeading<'t>;
    fn fmt_group_start(&mut self, data: Self::GroupStart) -> Result<(), Self::Error> {
        writeln!(self.target, "{}{}", indent(data.depth), data.name)
    }

    type CaseOutcome = CaseLine<'t>;
    fn fmt_case_outcome(&mut self, data: Self::CaseOutcome) -> Result<(), Self::Error> {
        let pad = indent(data.depth + 1);
        match (&data.status, self.use_color()) {
            (CaseStatus::Passed, false) => writeln!(self.target, "{pad}✓ {}", data.name),
            (CaseStatus::Passed, true) => {
                writeln!(self.target, "{pad}{GREEN}✓{RESET} {}", data.name)
            }
            (CaseStatus::Failed(_), false) => writeln!(self.target, "{pad}✗ {}", data.name),
            (CaseStatus::Failed(_), true) => {
                writeln!(self.target, "{pad}{RED}✗ {}{RESET}", data.name)
            }
            (CaseStatus::Skipped { reason }, false) => {
                writeln!(self.target, "{pad}- {} (skipped: {reason})", data.name)
            }
            (CaseStatus::Skipped { reason }, true) => {
                writeln!(
                    self.target,
                    "{pad}{YELLOW}- {} (skipped: {reason}){RESET}",
                    data.name
                )
            }
        }
    }

    type RunOutcomes = RunSummary<'t>;
    fn fmt_run_outcomes(&mut self, data: Self::RunOutcomes) -> Result<(), Self::Error> {
        if !data.failures.is_empty() {
            writeln!(self.target)?;
            writeln!(self.target, "failures:")?;
            for failure in data.failures.iter() {
                writeln!(self.target)?;
                writeln!(self.target, "---- {} :: {} ----", failure.group, failure.name)?;
                match &failure.failure {
                    CaseFailure::Error(err) => writeln!(self.target, "Error: {err}")?,
                    CaseFailure::Panicked(msg) => writeln!(self.target, "Panicked: {msg}")?,
                }
            }
        }

        writeln!(self.target)?;
        write!(self.target, "suite result: ")?;
        match (data.failed, self.use_color()) {
            (0, false) => write!(self.target, "ok. ")?,
            (0, true) => write!(self.target, "{GREEN}ok{RESET}. ")?,
            (_, false) => write!(self.target, "FAILED. ")?,
            (_, true) => write!(self.target, "{RED}FAILED{RESET}. ")?,
        }
        writeln!(
            self.target,
            "{} passed; {} failed; {} skipped; finished in {:.2}s",
            data.passed,
            data.failed,
            data.skipped,
            data.duration.as_secs_f64()
        )
    }

    type RunInit = ();
    type CaseStart = ();
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        harness,
        suite::{Group, Suite},
    };

    #[derive(Debug, Default, Clone)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let mut guard = self.0.lock().map_err(|_| io::Error::other("poisoned"))?;
            guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SupportsColor for Buffer {
        fn supports_color(&self) -> bool {
            false
        }
    }

    impl Buffer {
        fn to_string_lossy(&self) -> String {
            let guard = self.0.lock().expect("buffer lock poisoned");
            String::from_utf8_lossy(&guard).into_owned()
        }
    }

    #[test]
    fn renders_tree_failures_and_summary() {
        let buffer = Buffer::default();
        let suite = Suite::<()>::new().group(
            Group::new("Basic")
                .case("creates a post", || ())
                .case("updates a post", || Err::<(), &str>("invalid author"))
                .case("deletes a post", || ()),
        );

        let report = harness(&suite)
            .with_formatter(PrettyFormatter::default().with_target(buffer.clone()))
            .run();
        assert!(report.fmt_errors.is_empty());

        let output = buffer.to_string_lossy();
        assert!(output.contains("running 3 cases in 1 groups"));
        assert!(output.contains("  Basic"));
        assert!(output.contains("✓ creates a post"));
        assert!(output.contains("✗ updates a post"));
        assert!(output.contains("- deletes a post (skipped: earlier case failed in this group)"));
        assert!(output.contains("---- Basic :: updates a post ----"));
        assert!(output.contains("suite result: FAILED. 1 passed; 1 failed; 1 skipped;"));
    }

    #[test]
    fn clean_run_reports_ok() {
        let buffer = Buffer::default();
        let suite = Suite::<()>::new().group(Group::new("Basic").case("works", || ()));

        harness(&suite)
            .with_formatter(PrettyFormatter::default().with_target(buffer.clone()))
            .run();

        let output = buffer.to_string_lossy();
        assert!(output.contains("running 1 case"));
        assert!(output.contains("suite result: ok. 1 passed; 0 failed; 0 skipped;"));
        assert!(!output.contains("failures:"));
    }
}
