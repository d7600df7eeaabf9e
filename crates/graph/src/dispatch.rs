use std::sync::Arc;

use async_trait::async_trait;
use graphops_core::RequestEnvelope;

/// Executes a fully composed request.
///
/// The client hands over the envelope and returns whatever comes back,
/// success or failure, without inspecting it. Transport, TLS, auth header
/// injection, timeouts and retries all belong to the implementation.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    type Response: Send;
    type Error: Send;

    async fn dispatch(&self, request: RequestEnvelope) -> Result<Self::Response, Self::Error>;
}

#[async_trait]
impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    type Response = D::Response;
    type Error = D::Error;

    async fn dispatch(&self, request: RequestEnvelope) -> Result<Self::Response, Self::Error> {
        (**self).dispatch(request).await
    }
}
