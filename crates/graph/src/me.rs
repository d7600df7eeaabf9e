use graphops_core::payload::PasswordChange;
use graphops_core::{CallContext, Method, ResourcePath};

use crate::client::GraphClient;
use crate::dispatch::Dispatcher;

/// Operations on the calling user's own account.
pub struct MeClient<'a, D> {
    graph: &'a GraphClient<D>,
}

impl<'a, D: Dispatcher> MeClient<'a, D> {
    pub fn new(graph: &'a GraphClient<D>) -> Self {
        Self { graph }
    }

    /// `POST me/changePassword`. Authenticates with the caller's context
    /// credentials, which normally hold the current password as well.
    pub async fn change_own_password(
        &self,
        ctx: &CallContext,
        change: &PasswordChange,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Post, &ResourcePath::new("me/changePassword"), ctx)
            .with_body(change.build());
        self.graph.send(request).await
    }
}
