use std::{borrow::Cow, future::Future, panic::RefUnwindSafe};

use crate::case::{Case, CaseFn, CaseFnHandle, CaseMeta, CaseResult};

/// An ordered collection of cases, possibly with nested groups.
///
/// The structure is built once at registration time. During a run the cases
/// execute in declaration order, then the nested groups, in declaration
/// order. Nothing mutates the tree after registration; only outcomes
/// accumulate.
#[derive(Debug)]
#[non_exhaustive]
pub struct Group<Extra = ()> {
    pub name: Cow<'static, str>,
    pub cases: Vec<Case<Extra>>,
    pub groups: Vec<Group<Extra>>,
}

impl<Extra> Group<Extra> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Append a preconstructed case.
    pub fn push_case(mut self, case: Case<Extra>) -> Self {
        self.cases.push(case);
        self
    }

    /// Append a nested group. It runs after this group's own cases and is
    /// gated on them.
    pub fn group(mut self, group: Group<Extra>) -> Self {
        self.groups.push(group);
        self
    }

    /// Cases in this group and all nested groups.
    pub fn case_count(&self) -> usize {
        self.cases.len() + self.groups.iter().map(Group::case_count).sum::<usize>()
    }
}

impl<Extra: Default> Group<Extra> {
    /// Register a named case.
    pub fn case<F>(self, name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: CaseFn + Send + Sync + RefUnwindSafe + 'static,
    {
        self.push_case(Case::new(
            CaseFnHandle::Owned(Box::new(body)),
            CaseMeta {
                name: name.into(),
                extra: Extra::default(),
            },
        ))
    }

    /// Register a named case with an asynchronous body.
    ///
    /// The body is awaited to completion before the next case starts.
    pub fn async_case<F, Fut, T>(self, name: impl Into<Cow<'static, str>>, body: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + RefUnwindSafe + 'static,
        Fut: Future<Output = T>,
        T: Into<CaseResult>,
    {
        self.push_case(Case::new(
            CaseFnHandle::from_async(body),
            CaseMeta {
                name: name.into(),
                extra: Extra::default(),
            },
        ))
    }
}

/// The root of the registration tree: an ordered list of top-level groups.
#[derive(Debug)]
#[non_exhaustive]
pub struct Suite<Extra = ()> {
    pub groups: Vec<Group<Extra>>,
}

impl<Extra> Suite<Extra> {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn group(mut self, group: Group<Extra>) -> Self {
        self.groups.push(group);
        self
    }

    pub fn case_count(&self) -> usize {
        self.groups.iter().map(Group::case_count).sum()
    }
}

impl<Extra> Default for Suite<Extra> {
    fn default() -> Self {
        Self::new()
    }
}
