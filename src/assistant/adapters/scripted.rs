//! Scripted generative model for local runs and tests.

use crate::assistant::domain::ModelRequest;
use crate::assistant::ports::{GenerativeModel, GenerativeModelError, GenerativeModelResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct ScriptState {
    replies: VecDeque<GenerativeModelResult<String>>,
    requests: Vec<ModelRequest>,
}

/// Model that answers from a queue of prepared replies.
///
/// Every request is recorded. When the queue runs dry the model answers
/// with [`GenerativeModelError::EmptyResponse`]. Queued replies outlive a
/// panic in another holder of the script; every queue operation is a single
/// push or pop, so a poisoned lock is recovered rather than reported.
#[derive(Debug, Clone, Default)]
pub struct ScriptedModel {
    state: Arc<Mutex<ScriptState>>,
    delay: Option<Duration>,
}

impl ScriptedModel {
    /// Creates a model with no prepared replies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    #[must_use]
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queues a failure.
    #[must_use]
    pub fn with_failure(self, error: GenerativeModelError) -> Self {
        self.push(Err(error));
        self
    }

    /// Delays every reply by `delay`.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queues a reply on a shared handle.
    pub fn push(&self, reply: GenerativeModelResult<String>) {
        self.script().replies.push_back(reply);
    }

    /// Returns every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.script().requests.clone()
    }

    fn script(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(&self, request: &ModelRequest) -> GenerativeModelResult<String> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.script();
        state.requests.push(request.clone());
        state
            .replies
            .pop_front()
            .unwrap_or(Err(GenerativeModelError::EmptyResponse))
    }
}

#[cfg(test)]
#[expect(
    clippy::panic_in_result_fn,
    reason = "Test uses assertions for verification while returning Result for error propagation"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn replies_survive_a_panic_while_the_script_is_held() -> Result<(), eyre::Report> {
        let model = ScriptedModel::new().with_reply("before");
        let shared = Arc::clone(&model.state);
        let holder = std::thread::spawn(move || {
            let _held = shared.lock();
            panic!("script holder panicked");
        });
        assert!(holder.join().is_err());
        assert!(model.state.is_poisoned());

        model.push(Ok("after".to_owned()));
        let first = model.generate(&ModelRequest::text("one")).await?;
        let second = model.generate(&ModelRequest::text("two")).await?;

        assert_eq!([first.as_str(), second.as_str()], ["before", "after"]);
        assert_eq!(model.requests().len(), 2);
        Ok(())
    }
}
