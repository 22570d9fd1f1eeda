use crate::formatter::*;

/// A formatter that produces no output.
///
/// `NoFormatter` implements [`SuiteFormatter`] but discards every event.
/// Useful when a run's result is consumed programmatically through the
/// report and nothing should reach the terminal.
#[derive(Debug, Default, Clone)]
pub struct NoFormatter;

macro_rules! impl_unit_from {
    [$($name:ident$(<$($generic:tt),*>)?),* $(,)?] => {$(
        impl$(<$($generic),*>)? From<$name$(<$($generic),*>)?> for () {
            fn from(_: $name$(<$($generic),*>)?) -> () {}
        })*
    };
}

impl_unit_from![
    FmtRunInit<'t, Extra>,
    FmtRunStart,
    FmtGroupStart<'t, Extra>,
    FmtCaseStart<'t, Extra>,
    FmtCaseOutcome<'t, 'o, Extra>,
    FmtRunOutcomes<'t, 'o>,
];

impl<'t, Extra: 't> SuiteFormatter<'t, Extra> for NoFormatter {
    type Error = ();
    type RunInit = ();
    type RunStart = ();
    type GroupStart = ();
    type CaseStart = ();
    type CaseOutcome = ();
    type RunOutcomes = ();
}
