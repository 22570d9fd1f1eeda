mod suite;
use std::io;

pub use suite::SuiteHarness;

use crate::{
    formatter::{FormatEvent, pretty::PrettyFormatter},
    gate::LinearGate,
    panic::DefaultPanicHandler,
    suite::Suite,
};

/// Build a harness with the default strategies: the one-level dependency
/// gate, panic capture, and pretty output on stdout.
pub fn harness<'t, Extra>(
    suite: &'t Suite<Extra>,
) -> SuiteHarness<'t, Extra, LinearGate, DefaultPanicHandler, PrettyFormatter<io::Stdout>> {
    SuiteHarness {
        suite,
        gate: LinearGate,
        panic_handler: DefaultPanicHandler,
        formatter: PrettyFormatter::default(),
    }
}

pub(crate) trait PushOnError<E> {
    fn push_on_error(&mut self, event: FormatEvent, res: Result<(), E>);
}

impl<E> PushOnError<E> for Vec<(FormatEvent, E)> {
    fn push_on_error(&mut self, event: FormatEvent, res: Result<(), E>) {
        if let Err(err) = res {
            self.push((event, err));
        }
    }
}
