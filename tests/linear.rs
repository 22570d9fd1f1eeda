//! End-to-end run against a fake call-based backend.
//!
//! The suite below mirrors how linsuite is meant to be used: a shared
//! client drives ordered calls in a group, later cases build on the results
//! of earlier ones, and an `Errors` group asserts the failure shapes of bad
//! calls with `expect_reject`.

use std::{
    collections::HashMap,
    fmt,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use linsuite::{
    formatter::no::NoFormatter,
    harness,
    reject::{ErrorMatcher, RejectionFailure, expect_reject},
    suite::{Group, Suite},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AppError {
    NotFound(u64),
    InvalidInput(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(id) => write!(f, "no post with id {id}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

#[derive(Debug, Default)]
struct FakeBackend {
    posts: Mutex<HashMap<u64, String>>,
    next_id: Mutex<u64>,
}

impl FakeBackend {
    async fn create_post(&self, message: &str) -> Result<u64, AppError> {
        if message.is_empty() {
            return Err(AppError::InvalidInput("message must not be empty"));
        }
        let mut next_id = self.next_id.lock().expect("lock poisoned");
        let id = *next_id;
        *next_id += 1;
        self.posts
            .lock()
            .expect("lock poisoned")
            .insert(id, message.to_string());
        Ok(id)
    }

    async fn get_post(&self, id: u64) -> Result<String, AppError> {
        self.posts
            .lock()
            .expect("lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }
}

#[test]
fn basic_and_error_scenarios() {
    let backend = Arc::new(FakeBackend::default());
    let post_id = Arc::new(Mutex::new(None::<u64>));

    let basic = {
        let create_backend = Arc::clone(&backend);
        let create_id = Arc::clone(&post_id);
        let read_backend = Arc::clone(&backend);
        let read_id = Arc::clone(&post_id);

        Group::new("Basic")
            .async_case("creates a post", move || {
                let backend = Arc::clone(&create_backend);
                let post_id = Arc::clone(&create_id);
                async move {
                    let id = backend.create_post("hello world").await?;
                    *post_id.lock().expect("lock poisoned") = Some(id);
                    Ok::<_, AppError>(())
                }
            })
            .async_case("reads it back", move || {
                let backend = Arc::clone(&read_backend);
                let post_id = Arc::clone(&read_id);
                async move {
                    let id = post_id
                        .lock()
                        .expect("lock poisoned")
                        .ok_or(AppError::InvalidInput("no post created yet"))?;
                    let message = backend.get_post(id).await?;
                    match message.as_str() {
                        "hello world" => Ok(()),
                        _ => Err(AppError::InvalidInput("unexpected message")),
                    }
                }
            })
    };

    let errors = {
        let missing_backend = Arc::clone(&backend);
        let invalid_backend = Arc::clone(&backend);

        Group::new("Errors")
            .async_case("rejects reading a missing post", move || {
                let backend = Arc::clone(&missing_backend);
                async move {
                    expect_reject(
                        backend.get_post(9999),
                        ErrorMatcher::of_kind::<AppError>().containing("no post with id"),
                    )
                    .await
                }
            })
            .async_case("rejects an empty message", move || {
                let backend = Arc::clone(&invalid_backend);
                async move { expect_reject(backend.create_post(""), "must not be empty").await }
            })
            .async_case("reports success as a rejection failure", move || async move {
                let outcome = expect_reject(async { Ok::<_, AppError>(1) }, ErrorMatcher::any()).await;
                match outcome {
                    Err(RejectionFailure::UnexpectedSuccess { .. }) => Ok(()),
                    other => Err(format!("expected UnexpectedSuccess, got {other:?}")),
                }
            })
    };

    let suite = Suite::<()>::new().group(basic).group(errors);
    let report = harness(&suite).with_formatter(NoFormatter).run();

    assert_eq!(report.passed(), 5);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.skipped(), 0);
    assert!(!report.has_failures());

    let groups: Vec<_> = report.outcomes.iter().map(|(name, _)| *name).collect();
    assert_eq!(groups, ["Basic", "Errors"]);
}

#[test]
fn broken_backend_gates_the_dependent_group() {
    // Reading before anything was created fails, so the nested assertions
    // on the created post are skipped instead of producing noise.
    static RAN: AtomicUsize = AtomicUsize::new(0);

    let backend = Arc::new(FakeBackend::default());

    let suite = Suite::<()>::new().group(
        Group::new("Basic")
            .async_case("reads a post that was never created", {
                let backend = Arc::clone(&backend);
                move || {
                    let backend = Arc::clone(&backend);
                    async move { backend.get_post(0).await.map(|_| ()) }
                }
            })
            .group(
                Group::new("Content")
                    .case("checks the message", || {
                        RAN.fetch_add(1, Ordering::SeqCst);
                    })
                    .case("checks the author", || {
                        RAN.fetch_add(1, Ordering::SeqCst);
                    }),
            ),
    );

    let report = harness(&suite).with_formatter(NoFormatter).run();

    assert_eq!(RAN.load(Ordering::SeqCst), 0);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.skipped(), 2);

    let content = report
        .outcomes
        .iter()
        .find(|(name, _)| *name == "Content")
        .expect("Content group must be reported");
    assert!(content.1.iter().all(|(_, outcome)| outcome.skipped()));
}
