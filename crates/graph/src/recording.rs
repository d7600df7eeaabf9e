use std::convert::Infallible;
use std::sync::Arc;

use async_trait::async_trait;
use graphops_core::RequestEnvelope;
use tokio::sync::Mutex;

use crate::dispatch::Dispatcher;

/// Dispatcher that sends nothing: every envelope is recorded and handed
/// back as the response. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    requests: Arc<Mutex<Vec<RequestEnvelope>>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn requests(&self) -> Vec<RequestEnvelope> {
        self.requests.lock().await.clone()
    }

    pub async fn last(&self) -> Option<RequestEnvelope> {
        self.requests.lock().await.last().cloned()
    }

    pub async fn clear(&self) {
        self.requests.lock().await.clear();
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    type Response = RequestEnvelope;
    type Error = Infallible;

    async fn dispatch(&self, request: RequestEnvelope) -> Result<RequestEnvelope, Infallible> {
        self.requests.lock().await.push(request.clone());
        Ok(request)
    }
}
