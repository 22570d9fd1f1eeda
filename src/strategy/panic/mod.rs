use std::panic::UnwindSafe;

use crate::{
    case::{CaseMeta, CaseResult},
    outcome::CaseStatus,
};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// A strategy for turning a case body's behavior into a [`CaseStatus`].
///
/// The gate relies on the runner's bookkeeping to see failures, so a body
/// that escapes with a panic must still end up as a failed status. The
/// handler is the single place where that classification happens.
pub trait CasePanicHandler<Extra> {
    fn handle<F: FnOnce() -> CaseResult + UnwindSafe>(
        &self,
        f: F,
        meta: &CaseMeta<Extra>,
    ) -> CaseStatus;
}
