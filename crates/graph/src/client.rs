use graphops_core::{CallContext, Method, RequestEnvelope, ResourcePath, ServiceEndpoint};
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::drives::DrivesClient;
use crate::groups::GroupsClient;
use crate::me::MeClient;
use crate::users::UsersClient;

/// Entry point for all Graph operations against one service endpoint.
///
/// Holds no per-call state; clone it or share it across tasks freely.
#[derive(Debug, Clone)]
pub struct GraphClient<D> {
    endpoint: ServiceEndpoint,
    dispatcher: D,
}

impl<D: Dispatcher> GraphClient<D> {
    pub fn new(endpoint: ServiceEndpoint, dispatcher: D) -> Self {
        Self {
            endpoint,
            dispatcher,
        }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn users(&self) -> UsersClient<'_, D> {
        UsersClient::new(self)
    }

    pub fn groups(&self) -> GroupsClient<'_, D> {
        GroupsClient::new(self)
    }

    pub fn drives(&self) -> DrivesClient<'_, D> {
        DrivesClient::new(self)
    }

    pub fn me(&self) -> MeClient<'_, D> {
        MeClient::new(self)
    }

    /// Start an envelope for `path`, resolved against this client's endpoint.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &ResourcePath,
        ctx: &CallContext,
    ) -> RequestEnvelope {
        RequestEnvelope::new(method, self.endpoint.resolve_path(path), ctx)
    }

    /// Apply the default headers and hand the envelope to the dispatcher.
    pub(crate) async fn send(&self, request: RequestEnvelope) -> Result<D::Response, D::Error> {
        let request = request.apply_default_headers();
        debug!(
            method = %request.method,
            url = %request.url,
            request_id = %request.request_id,
            "dispatching"
        );
        self.dispatcher.dispatch(request).await
    }
}
