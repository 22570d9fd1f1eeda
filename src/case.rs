use std::{borrow::Cow, fmt::Debug, future::Future, ops::Deref, panic::RefUnwindSafe};

/// A single named unit of work with one outcome.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Case<Extra = ()> {
    body: CaseFnHandle,
    pub meta: CaseMeta<Extra>,
}

impl<Extra> Case<Extra> {
    pub const fn new(body: CaseFnHandle, meta: CaseMeta<Extra>) -> Self {
        Self { body, meta }
    }

    pub(crate) fn call(&self) -> CaseResult {
        self.body.call()
    }
}

impl<Extra> Deref for Case<Extra> {
    type Target = CaseMeta<Extra>;

    fn deref(&self) -> &Self::Target {
        &self.meta
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaseMeta<Extra = ()> {
    pub name: Cow<'static, str>,
    pub extra: Extra,
}

/// The body of a case.
#[non_exhaustive]
pub enum CaseFnHandle {
    Ptr(fn() -> CaseResult),
    Owned(Box<dyn CaseFn + Send + Sync + RefUnwindSafe>),
    Static(&'static (dyn CaseFn + Send + Sync + RefUnwindSafe)),
}

impl Debug for CaseFnHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ptr(ptr) => f.debug_tuple("Ptr").field(ptr).finish(),
            Self::Owned(_) => write!(f, "Owned(...)"),
            Self::Static(_) => write!(f, "Static(...)"),
        }
    }
}

impl Default for CaseFnHandle {
    fn default() -> Self {
        Self::Static(&|| {})
    }
}

impl CaseFnHandle {
    pub const fn from_const_fn(f: fn() -> CaseResult) -> Self {
        Self::Ptr(f)
    }

    pub fn from_boxed<F, T>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + RefUnwindSafe + 'static,
        T: Into<CaseResult>,
    {
        Self::Owned(Box::new(f))
    }

    pub const fn from_static_obj(f: &'static (dyn CaseFn + Send + Sync + RefUnwindSafe)) -> Self {
        Self::Static(f)
    }

    /// Wrap a future-returning closure.
    ///
    /// The future is driven to completion on the calling thread, so the case
    /// suspends at each await point but never runs concurrently with another
    /// case.
    pub fn from_async<F, Fut, T>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + RefUnwindSafe + 'static,
        Fut: Future<Output = T>,
        T: Into<CaseResult>,
    {
        Self::Owned(Box::new(move || futures::executor::block_on(f())))
    }

    pub fn call(&self) -> CaseResult {
        match self {
            Self::Ptr(f) => f(),
            Self::Owned(f) => f.call_case(),
            Self::Static(f) => f.call_case(),
        }
    }
}

pub trait CaseFn {
    fn call_case(&self) -> CaseResult;
}

impl<F, T> CaseFn for F
where
    F: Fn() -> T,
    T: Into<CaseResult>,
{
    fn call_case(&self) -> CaseResult {
        (self)().into()
    }
}

#[derive(Debug)]
pub struct CaseResult(pub Result<(), String>);

impl From<()> for CaseResult {
    fn from(_: ()) -> Self {
        Self(Ok(()))
    }
}

impl<E: Debug> From<Result<(), E>> for CaseResult {
    fn from(v: Result<(), E>) -> Self {
        CaseResult(v.map_err(|e| format!("{e:#?}")))
    }
}
