//! Ordered test suites with dependency-gated skipping.
//!
//! Cases inside a [`Group`](suite::Group) run strictly in declaration order.
//! Once a case fails, the remaining cases of that group and every case of
//! its directly nested groups are skipped instead of executed. The check is
//! deliberately shallow: a case is gated on its own group and its immediate
//! parent, never deeper. See [`gate::LinearGate`] for the exact contract.
//!
//! [`reject::expect_reject`] complements the scheduler for cases whose whole
//! point is that an operation fails in a specific way.

pub mod case;
pub mod formatter;
pub mod outcome;
pub mod reject;
pub mod suite;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

#[cfg(test)]
pub(crate) mod test_support;
