// Recording mock for the settings capability set
//
// Design Decision: Hand-maintained mock with an inspectable invocation log
//
// Rationale: Generated mocks verify expectations internally but do not hand
// the test an ordered call log to assert against. This mock keeps one FIFO
// queue of canned results per operation plus an invocation log, so tests can
// queue results up front, run the code under test, and then assert on what
// was invoked and in which order.
//
// Failure semantics: every error the mock returns was queued by the test
// author. Invoking an operation with an empty queue is a configuration
// error in the test itself and panics immediately rather than returning a
// silently wrong default.

use super::traits::SettingsService;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use uuid::Uuid;

/// One recorded invocation of a settings operation
///
/// The operations take no arguments, so the tag alone identifies a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsCall {
    AcceptEula,
    InitializeIdentifier,
    IsEulaAccepted,
}

impl SettingsCall {
    /// Method name as it appears in panic messages and log events
    pub fn method_name(&self) -> &'static str {
        match self {
            SettingsCall::AcceptEula => "accept_eula",
            SettingsCall::InitializeIdentifier => "initialize_identifier",
            SettingsCall::IsEulaAccepted => "is_eula_accepted",
        }
    }
}

/// Configurable, call-recording stand-in for [`SettingsService`]
///
/// Lifecycle: create at the start of a test, queue expected results, hand to
/// the code under test as `Arc<dyn SettingsService>`, then inspect the
/// recorded calls. One mock instance belongs to one test case; it is not
/// meant to be shared across concurrent tests.
///
/// The interior mutexes exist only because the trait takes `&self` and
/// carries `Send + Sync` bounds for the async runtime.
///
/// Usage:
///     let settings = MockSettingsService::new();
///     settings.expect_is_eula_accepted(Ok(false));
///     settings.expect_accept_eula(Ok(()));
///     run_onboarding(&settings).await?;
///     assert_eq!(
///         settings.calls(),
///         vec![SettingsCall::IsEulaAccepted, SettingsCall::AcceptEula],
///     );
///     settings.assert_exhausted();
#[derive(Default)]
pub struct MockSettingsService {
    accept_eula_returns: Mutex<VecDeque<Result<()>>>,
    initialize_identifier_returns: Mutex<VecDeque<Result<Uuid>>>,
    is_eula_accepted_returns: Mutex<VecDeque<Result<bool>>>,
    calls: Mutex<Vec<SettingsCall>>,
}

impl MockSettingsService {
    /// Create a mock with empty queues and an empty invocation log
    ///
    /// Every operation must be configured before the code under test
    /// invokes it, or the invocation panics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a canned result for the next `accept_eula` call
    pub fn expect_accept_eula(&self, result: Result<()>) {
        self.lock_queue(&self.accept_eula_returns).push_back(result);
    }

    /// Queue a canned result for the next `initialize_identifier` call
    pub fn expect_initialize_identifier(&self, result: Result<Uuid>) {
        self.lock_queue(&self.initialize_identifier_returns)
            .push_back(result);
    }

    /// Queue the absent-identifier case for the next `initialize_identifier` call
    ///
    /// The call returns the zero-valued identifier (`Uuid::nil()`) with no
    /// failure, mirroring a backend that has not provisioned one yet.
    pub fn expect_initialize_identifier_unset(&self) {
        self.expect_initialize_identifier(Ok(Uuid::nil()));
    }

    /// Queue a canned result for the next `is_eula_accepted` call
    pub fn expect_is_eula_accepted(&self, result: Result<bool>) {
        self.lock_queue(&self.is_eula_accepted_returns)
            .push_back(result);
    }

    /// Snapshot of the invocation log, in invocation order
    pub fn calls(&self) -> Vec<SettingsCall> {
        self.calls.lock().expect("mock call log lock poisoned").clone()
    }

    /// Number of recorded invocations of one operation
    pub fn call_count(&self, call: SettingsCall) -> usize {
        self.calls()
            .iter()
            .filter(|recorded| **recorded == call)
            .count()
    }

    /// Panic if any queued expectation was never consumed
    ///
    /// Call at the end of a test to catch results the code under test
    /// was expected to ask for but never did.
    pub fn assert_exhausted(&self) {
        let leftovers: Vec<&'static str> = [
            (
                SettingsCall::AcceptEula,
                self.lock_queue(&self.accept_eula_returns).len(),
            ),
            (
                SettingsCall::InitializeIdentifier,
                self.lock_queue(&self.initialize_identifier_returns).len(),
            ),
            (
                SettingsCall::IsEulaAccepted,
                self.lock_queue(&self.is_eula_accepted_returns).len(),
            ),
        ]
        .into_iter()
        .filter(|(_, pending)| *pending > 0)
        .map(|(call, _)| call.method_name())
        .collect();

        if !leftovers.is_empty() {
            panic!(
                "MockSettingsService has unconsumed expectations for: {}",
                leftovers.join(", ")
            );
        }
    }

    fn lock_queue<'a, T>(&self, queue: &'a Mutex<VecDeque<T>>) -> std::sync::MutexGuard<'a, VecDeque<T>> {
        queue.lock().expect("mock result queue lock poisoned")
    }

    /// Record the invocation, then pop the next canned result
    ///
    /// Empty queue means the test never configured this call: abort loudly.
    fn consume<T>(&self, call: SettingsCall, queue: &Mutex<VecDeque<T>>) -> T {
        tracing::debug!(method = call.method_name(), "mock settings call");
        self.calls
            .lock()
            .expect("mock call log lock poisoned")
            .push(call);

        self.lock_queue(queue).pop_front().unwrap_or_else(|| {
            panic!(
                "MockSettingsService::{} called without a configured return value",
                call.method_name()
            )
        })
    }
}

#[async_trait]
impl SettingsService for MockSettingsService {
    async fn accept_eula(&self) -> Result<()> {
        self.consume(SettingsCall::AcceptEula, &self.accept_eula_returns)
    }

    async fn initialize_identifier(&self) -> Result<Uuid> {
        self.consume(
            SettingsCall::InitializeIdentifier,
            &self.initialize_identifier_returns,
        )
    }

    async fn is_eula_accepted(&self) -> Result<bool> {
        self.consume(
            SettingsCall::IsEulaAccepted,
            &self.is_eula_accepted_returns,
        )
    }
}
