use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::SmarterURequestError;

#[derive(Debug, Default)]
struct MockState {
    queue: VecDeque<Result<HttpResponse, SmarterURequestError>>,
    history: Vec<HttpRequest>,
}

/// Replays queued responses in order and records every request it is given.
///
/// Clones share the same queue and history, so a test can keep one handle
/// and give the other to the client.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queue a response with the given status and body.
    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.state().queue.push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a `200 OK` response.
    pub fn respond_ok(&self, body: impl Into<String>) -> &Self {
        self.respond(200, body)
    }

    /// Queue a failure to complete the exchange.
    pub fn fail(&self, message: impl Into<String>) -> &Self {
        self.state()
            .queue
            .push_back(Err(SmarterURequestError::Http(message.into())));
        self
    }

    /// Every request sent so far, oldest first.
    pub fn history(&self) -> Vec<HttpRequest> {
        self.state().history.clone()
    }

    /// The `package` field of the most recent request.
    pub fn last_package(&self) -> Option<String> {
        self.state()
            .history
            .last()
            .and_then(|request| request.package().map(str::to_string))
    }

    /// Responses still queued.
    pub fn pending(&self) -> usize {
        self.state().queue.len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SmarterURequestError> {
        let mut state = self.state();
        log::debug!("MockTransport answering {} {}", request.method, request.url);
        state.history.push(request);
        state.queue.pop_front().unwrap_or_else(|| {
            Err(SmarterURequestError::Http(
                "MockTransport has no queued response".into(),
            ))
        })
    }
}
