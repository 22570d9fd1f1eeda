use std::{
    any::Any,
    panic::{UnwindSafe, catch_unwind},
};

use crate::{
    case::{CaseMeta, CaseResult},
    outcome::{CaseFailure, CaseStatus},
    panic::CasePanicHandler,
};

/// The default [`CasePanicHandler`] used by the default harness.
///
/// A case passes when it returns `Ok(())` and does not panic. A returned
/// error becomes [`CaseFailure::Error`], a caught panic becomes
/// [`CaseFailure::Panicked`]. Either way the failure is visible to the next
/// case's gate check.
#[derive(Debug, Default, Clone)]
pub struct DefaultPanicHandler;

impl DefaultPanicHandler {
    /// Convert a panic payload into a string.
    ///
    /// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
    /// Other payload types are formatted as a generic placeholder.
    pub fn payload_as_string(err: Box<dyn Any + Send + 'static>) -> String {
        err.downcast::<&'static str>()
            .map(|s| s.to_string())
            .or_else(|err| err.downcast::<String>().map(|s| *s))
            .unwrap_or_else(|_| String::from("Box<dyn Any>"))
    }
}

impl<Extra> CasePanicHandler<Extra> for DefaultPanicHandler {
    fn handle<F: FnOnce() -> CaseResult + UnwindSafe>(
        &self,
        f: F,
        _: &CaseMeta<Extra>,
    ) -> CaseStatus {
        match catch_unwind(f) {
            Ok(result) => result.into(),
            Err(err) => CaseStatus::Failed(CaseFailure::Panicked(Self::payload_as_string(err))),
        }
    }
}
