use graphops_core::{Body, CallContext, DeleteMode, Headers, Method, ResourcePath, SpaceUpdate};
use tracing::info;

use crate::client::GraphClient;
use crate::dispatch::Dispatcher;

/// Space (drive) lifecycle operations.
///
/// A space is active after create/update, disabled after a soft delete
/// (recoverable through [`DrivesClient::restore_space`]), and purged after a
/// delete carrying the `Purge` header. Nothing here reverses a purge.
pub struct DrivesClient<'a, D> {
    graph: &'a GraphClient<D>,
}

impl<'a, D: Dispatcher> DrivesClient<'a, D> {
    pub fn new(graph: &'a GraphClient<D>) -> Self {
        Self { graph }
    }

    /// `POST drives` with an opaque caller body.
    pub async fn create_space(
        &self,
        ctx: &CallContext,
        body: impl Into<Body>,
        headers: Headers,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Post, &ResourcePath::new("drives"), ctx)
            .with_headers(headers)
            .with_body(body);
        self.graph.send(request).await
    }

    pub async fn update_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
        body: impl Into<Body>,
        headers: Headers,
    ) -> Result<D::Response, D::Error> {
        let update = SpaceUpdate::Update {
            body: body.into(),
            headers,
        };
        self.patch_space(ctx, space_id, update).await
    }

    pub async fn restore_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
    ) -> Result<D::Response, D::Error> {
        self.patch_space(ctx, space_id, SpaceUpdate::Restore).await
    }

    /// `PATCH drives/<id>`, as a plain update or as a restore.
    pub async fn patch_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
        update: SpaceUpdate,
    ) -> Result<D::Response, D::Error> {
        if matches!(update, SpaceUpdate::Restore) {
            info!(space = %space_id, "restoring space");
        }
        let (body, headers) = update.into_parts();
        let request = self
            .graph
            .request(Method::Patch, &space_path(space_id), ctx)
            .with_headers(headers)
            .with_body(body);
        self.graph.send(request).await
    }

    /// `GET me/drives`, with an optional query or path suffix.
    pub async fn get_my_spaces(
        &self,
        ctx: &CallContext,
        suffix: Option<&str>,
    ) -> Result<D::Response, D::Error> {
        let path = ResourcePath::new("me/drives").suffix(suffix);
        let request = self.graph.request(Method::Get, &path, ctx);
        self.graph.send(request).await
    }

    pub async fn get_all_spaces(
        &self,
        ctx: &CallContext,
        suffix: Option<&str>,
    ) -> Result<D::Response, D::Error> {
        let path = ResourcePath::new("drives").suffix(suffix);
        let request = self.graph.request(Method::Get, &path, ctx);
        self.graph.send(request).await
    }

    pub async fn get_single_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
        suffix: Option<&str>,
    ) -> Result<D::Response, D::Error> {
        let path = space_path(space_id).suffix(suffix);
        let request = self.graph.request(Method::Get, &path, ctx);
        self.graph.send(request).await
    }

    pub async fn disable_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
    ) -> Result<D::Response, D::Error> {
        self.remove_space(ctx, space_id, DeleteMode::Soft).await
    }

    /// Permanently delete a space. The server only accepts this for a
    /// space that is already disabled.
    pub async fn delete_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
    ) -> Result<D::Response, D::Error> {
        self.remove_space(ctx, space_id, DeleteMode::Purge).await
    }

    /// `DELETE drives/<id>`; the mode decides between disable and purge.
    pub async fn remove_space(
        &self,
        ctx: &CallContext,
        space_id: &str,
        mode: DeleteMode,
    ) -> Result<D::Response, D::Error> {
        if mode == DeleteMode::Purge {
            info!(space = %space_id, "purging space");
        }
        let request = self
            .graph
            .request(Method::Delete, &space_path(space_id), ctx)
            .with_headers(mode.headers());
        self.graph.send(request).await
    }
}

fn space_path(space_id: &str) -> ResourcePath {
    ResourcePath::new("drives").segment(space_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingDispatcher;
    use graphops_core::payload::SpacePayload;
    use graphops_core::space::{PURGE_HEADER, RESTORE_HEADER};
    use graphops_core::{Credentials, ServiceEndpoint};
    use serde_json::json;

    fn setup() -> (GraphClient<RecordingDispatcher>, CallContext) {
        let graph = GraphClient::new(
            ServiceEndpoint::new("https://ocis.test"),
            RecordingDispatcher::new(),
        );
        let ctx = CallContext::new(Credentials::new("alice", "123456"), "req-1");
        (graph, ctx)
    }

    #[tokio::test]
    async fn create_space_passes_body_through() {
        let (graph, ctx) = setup();
        let body = SpacePayload::new()
            .name("Project Venus")
            .drive_type("project")
            .build();
        let sent = graph
            .drives()
            .create_space(&ctx, body.clone(), Headers::new())
            .await
            .unwrap();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "https://ocis.test/graph/v1.0/drives");
        assert_eq!(sent.body, Some(Body::Json(body)));
        assert_eq!(sent.headers.get("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn create_space_sends_raw_body_verbatim() {
        let (graph, ctx) = setup();
        let sent = graph
            .drives()
            .create_space(&ctx, r#"{"name":"#, Headers::new())
            .await
            .unwrap();
        assert_eq!(sent.body.unwrap().to_text(), r#"{"name":"#);
    }

    #[tokio::test]
    async fn update_space_merges_caller_headers() {
        let (graph, ctx) = setup();
        let headers: Headers = [("If-Match", "etag-1")].into_iter().collect();
        let sent = graph
            .drives()
            .update_space(&ctx, "s1", json!({ "description": "new" }), headers)
            .await
            .unwrap();
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.url, "https://ocis.test/graph/v1.0/drives/s1");
        assert_eq!(sent.headers.get("If-Match"), Some("etag-1"));
        assert!(!sent.headers.contains(RESTORE_HEADER));
    }

    #[tokio::test]
    async fn delete_and_disable_differ_only_by_purge_header() {
        let (graph, ctx) = setup();
        let drives = graph.drives();

        let disabled = drives.disable_space(&ctx, "s1").await.unwrap();
        let purged = drives.delete_space(&ctx, "s1").await.unwrap();

        assert_eq!(disabled.method, purged.method);
        assert_eq!(disabled.url, purged.url);
        assert_eq!(disabled.method, Method::Delete);
        assert!(disabled.body.is_none() && purged.body.is_none());
        assert!(!disabled.headers.contains(PURGE_HEADER));
        assert_eq!(purged.headers.get(PURGE_HEADER), Some("T"));
    }

    #[tokio::test]
    async fn restore_is_patch_with_empty_object() {
        let (graph, ctx) = setup();
        let sent = graph.drives().restore_space(&ctx, "s1").await.unwrap();
        assert_eq!(sent.method, Method::Patch);
        assert_eq!(sent.url, "https://ocis.test/graph/v1.0/drives/s1");
        assert_eq!(sent.headers.get(RESTORE_HEADER), Some("true"));
        assert_eq!(sent.body.unwrap().to_text(), "{}");
    }

    #[tokio::test]
    async fn listing_suffixes() {
        let (graph, ctx) = setup();
        let drives = graph.drives();

        let mine = drives.get_my_spaces(&ctx, None).await.unwrap();
        assert_eq!(mine.url, "https://ocis.test/graph/v1.0/me/drives");

        let filtered = drives
            .get_all_spaces(&ctx, Some("?$filter=driveType eq 'project'"))
            .await
            .unwrap();
        assert_eq!(
            filtered.url,
            "https://ocis.test/graph/v1.0/drives?$filter=driveType eq 'project'"
        );

        let all = drives.get_all_spaces(&ctx, Some("")).await.unwrap();
        assert_eq!(all.url, "https://ocis.test/graph/v1.0/drives");

        let single = drives.get_single_space(&ctx, "s1", None).await.unwrap();
        assert_eq!(single.url, "https://ocis.test/graph/v1.0/drives/s1");
        assert!(single.body.is_none());

        let root = drives
            .get_single_space(&ctx, "s1", Some("root/children"))
            .await
            .unwrap();
        assert_eq!(root.url, "https://ocis.test/graph/v1.0/drives/s1/root/children");
    }

    #[tokio::test]
    async fn lifecycle_sequence_is_recorded_in_order() {
        let (graph, ctx) = setup();
        let drives = graph.drives();

        drives
            .create_space(&ctx, json!({ "name": "tmp" }), Headers::new())
            .await
            .unwrap();
        drives.disable_space(&ctx, "s1").await.unwrap();
        drives.restore_space(&ctx, "s1").await.unwrap();
        drives.disable_space(&ctx, "s1").await.unwrap();
        drives.delete_space(&ctx, "s1").await.unwrap();

        let methods: Vec<_> = graph
            .dispatcher()
            .requests()
            .await
            .iter()
            .map(|r| (r.method, r.headers.contains(PURGE_HEADER)))
            .collect();
        assert_eq!(
            methods,
            vec![
                (Method::Post, false),
                (Method::Delete, false),
                (Method::Patch, false),
                (Method::Delete, false),
                (Method::Delete, true),
            ]
        );
    }
}
