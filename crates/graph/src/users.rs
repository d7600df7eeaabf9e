use graphops_core::payload::{UserCreatePayload, UserPatchPayload};
use graphops_core::{CallContext, Method, ResourcePath};

use crate::client::GraphClient;
use crate::dispatch::Dispatcher;

pub struct UsersClient<'a, D> {
    graph: &'a GraphClient<D>,
}

impl<'a, D: Dispatcher> UsersClient<'a, D> {
    pub fn new(graph: &'a GraphClient<D>) -> Self {
        Self { graph }
    }

    /// `POST users` with the full create payload (display name and mail defaulted).
    pub async fn create_user(
        &self,
        ctx: &CallContext,
        payload: &UserCreatePayload,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Post, &ResourcePath::new("users"), ctx)
            .with_body(payload.build());
        self.graph.send(request).await
    }

    /// `PATCH users/<id>` carrying only the supplied fields.
    pub async fn edit_user(
        &self,
        ctx: &CallContext,
        user_id: &str,
        payload: &UserPatchPayload,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Patch, &user_path(user_id), ctx)
            .with_body(payload.build());
        self.graph.send(request).await
    }

    pub async fn get_user(
        &self,
        ctx: &CallContext,
        user_id: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self.graph.request(Method::Get, &user_path(user_id), ctx);
        self.graph.send(request).await
    }

    pub async fn get_users(&self, ctx: &CallContext) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Get, &ResourcePath::new("users"), ctx);
        self.graph.send(request).await
    }

    pub async fn delete_user(
        &self,
        ctx: &CallContext,
        user_id: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self.graph.request(Method::Delete, &user_path(user_id), ctx);
        self.graph.send(request).await
    }
}

fn user_path(user_id: &str) -> ResourcePath {
    ResourcePath::new("users").segment(user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingDispatcher;
    use graphops_core::envelope::{APPLICATION_JSON, CONTENT_TYPE};
    use graphops_core::{Body, Credentials, ServiceEndpoint};
    use serde_json::json;

    fn setup() -> (GraphClient<RecordingDispatcher>, CallContext) {
        let graph = GraphClient::new(
            ServiceEndpoint::new("https://ocis.test/"),
            RecordingDispatcher::new(),
        );
        let ctx = CallContext::new(Credentials::new("admin", "admin"), "req-1");
        (graph, ctx)
    }

    #[tokio::test]
    async fn create_user_posts_full_payload() {
        let (graph, ctx) = setup();
        let sent = graph
            .users()
            .create_user(&ctx, &UserCreatePayload::new("alice", "123"))
            .await
            .unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "https://ocis.test/graph/v1.0/users");
        assert_eq!(sent.headers.get(CONTENT_TYPE), Some(APPLICATION_JSON));
        assert_eq!(
            sent.body,
            Some(Body::Json(json!({
                "onPremisesSamAccountName": "alice",
                "passwordProfile": { "password": "123" },
                "displayName": "alice",
                "mail": "alice@example.com",
            })))
        );
    }

    #[tokio::test]
    async fn create_then_edit_display_name() {
        let (graph, ctx) = setup();
        let users = graph.users();

        let created = users
            .create_user(&ctx, &UserCreatePayload::new("alice", "pw"))
            .await
            .unwrap();
        let created = created.body.unwrap();
        assert_eq!(
            created.to_text(),
            r#"{"onPremisesSamAccountName":"alice","passwordProfile":{"password":"pw"},"displayName":"alice","mail":"alice@example.com"}"#
        );

        let edited = users
            .edit_user(
                &ctx,
                "alice-id",
                &UserPatchPayload::new().display_name("Alice W."),
            )
            .await
            .unwrap();
        assert_eq!(edited.method, Method::Patch);
        assert_eq!(edited.url, "https://ocis.test/graph/v1.0/users/alice-id");
        assert_eq!(edited.body.unwrap().to_text(), r#"{"displayName":"Alice W."}"#);
    }

    #[tokio::test]
    async fn edit_with_nothing_sends_empty_object() {
        let (graph, ctx) = setup();
        let sent = graph
            .users()
            .edit_user(&ctx, "u1", &UserPatchPayload::new())
            .await
            .unwrap();
        assert_eq!(sent.body.unwrap().to_text(), "{}");
    }

    #[tokio::test]
    async fn bodyless_user_calls() {
        let (graph, ctx) = setup();
        let users = graph.users();

        let get = users.get_user(&ctx, "brian").await.unwrap();
        assert_eq!(get.method, Method::Get);
        assert_eq!(get.url, "https://ocis.test/graph/v1.0/users/brian");
        assert!(get.body.is_none());
        assert!(get.headers.is_empty());

        let list = users.get_users(&ctx).await.unwrap();
        assert_eq!(list.url, "https://ocis.test/graph/v1.0/users");

        let delete = users.delete_user(&ctx, "brian").await.unwrap();
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.url, "https://ocis.test/graph/v1.0/users/brian");
        assert!(delete.body.is_none());
    }
}
