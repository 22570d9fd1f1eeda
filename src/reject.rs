//! Asserting that an operation fails in a specific way.
//!
//! [`expect_reject`] awaits an operation that is supposed to fail and checks
//! the error against an [`ErrorMatcher`]. A successful operation, a wrong
//! error kind, and a wrong error message are three distinct failures; none
//! of them ever passes through silently.

use std::{
    any::{Any, TypeId, type_name},
    borrow::Cow,
    fmt::Display,
    future::Future,
};

/// How an expected-rejection assertion can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectionFailure {
    /// The operation completed without raising anything.
    UnexpectedSuccess { context: Option<Cow<'static, str>> },
    /// The operation raised an error of the wrong type.
    KindMismatch {
        expected: &'static str,
        got: String,
        context: Option<Cow<'static, str>>,
    },
    /// The operation raised an error whose message misses the expected
    /// fragment.
    MessageMismatch {
        expected: Cow<'static, str>,
        got: String,
        context: Option<Cow<'static, str>>,
    },
}

impl Display for RejectionFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let context = match self {
            RejectionFailure::UnexpectedSuccess { context }
            | RejectionFailure::KindMismatch { context, .. }
            | RejectionFailure::MessageMismatch { context, .. } => context,
        };

        match self {
            RejectionFailure::UnexpectedSuccess { .. } => {
                write!(f, "expected rejection but the operation succeeded")?;
            }
            RejectionFailure::KindMismatch { expected, got, .. } => {
                write!(f, "expected rejection of kind {expected}, got: {got}")?;
            }
            RejectionFailure::MessageMismatch { expected, got, .. } => {
                write!(
                    f,
                    "expected rejection message containing {expected:?}, got: {got}"
                )?;
            }
        }

        if let Some(context) = context {
            write!(f, " ({context})")?;
        }
        Ok(())
    }
}

/// An expected error signature: kind and/or message fragment.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
pub struct ErrorMatcher {
    kind: Option<(TypeId, &'static str)>,
    message: Option<Cow<'static, str>>,
    context: Option<Cow<'static, str>>,
}

impl ErrorMatcher {
    /// Match any rejection at all.
    pub fn any() -> Self {
        Self::default()
    }

    /// Require the raised error to be of type `E`.
    pub fn of_kind<E: Any>() -> Self {
        Self {
            kind: Some((TypeId::of::<E>(), type_name::<E>())),
            ..Self::default()
        }
    }

    /// Additionally require the error's display output to contain `fragment`.
    pub fn containing(self, fragment: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: Some(fragment.into()),
            ..self
        }
    }

    /// Attach a human-readable note carried into any failure.
    pub fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    fn check<E: Display + Any>(self, err: &E) -> Result<(), RejectionFailure> {
        if let Some((type_id, expected)) = self.kind
            && TypeId::of::<E>() != type_id
        {
            return Err(RejectionFailure::KindMismatch {
                expected,
                got: format!("{}: {err}", type_name::<E>()),
                context: self.context,
            });
        }

        if let Some(expected) = self.message {
            let got = err.to_string();
            if !got.contains(expected.as_ref()) {
                return Err(RejectionFailure::MessageMismatch {
                    expected,
                    got,
                    context: self.context,
                });
            }
        }

        Ok(())
    }
}

/// A bare string is a message-fragment matcher.
impl From<&'static str> for ErrorMatcher {
    fn from(fragment: &'static str) -> Self {
        ErrorMatcher::any().containing(fragment)
    }
}

/// Await an operation that is expected to fail.
///
/// Succeeding is itself the failure here: a completed operation reports
/// [`RejectionFailure::UnexpectedSuccess`]. A raised error is checked
/// against `matcher`; a mismatch reports the kind or message it missed. The
/// returned error is [`Debug`](std::fmt::Debug), so `?` inside a case body
/// turns any of these into a failed case.
pub async fn expect_reject<T, E>(
    op: impl Future<Output = Result<T, E>>,
    matcher: impl Into<ErrorMatcher>,
) -> Result<(), RejectionFailure>
where
    E: Display + Any,
{
    let matcher = matcher.into();
    match op.await {
        Ok(_) => Err(RejectionFailure::UnexpectedSuccess {
            context: matcher.context,
        }),
        Err(err) => matcher.check(&err),
    }
}
