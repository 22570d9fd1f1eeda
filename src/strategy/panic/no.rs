use std::panic::UnwindSafe;

use crate::{
    case::{CaseMeta, CaseResult},
    outcome::CaseStatus,
    panic::CasePanicHandler,
};

/// A [`CasePanicHandler`] that does not catch panics.
///
/// The body's return value is converted into a [`CaseStatus`]; a panic
/// unwinds through the runner and aborts the whole run. Useful when the
/// surrounding harness (for example `cargo test`) already owns panic
/// handling.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoPanicHandler;

impl<Extra> CasePanicHandler<Extra> for NoPanicHandler {
    fn handle<F: FnOnce() -> CaseResult + UnwindSafe>(
        &self,
        f: F,
        _: &CaseMeta<Extra>,
    ) -> CaseStatus {
        f().into()
    }
}
