use graphops_core::payload::GroupPayload;
use graphops_core::relationship::{
    member_ref_path, member_reference, member_urls, members_bind, members_ref_path,
};
use graphops_core::{CallContext, Method, ResourcePath};

use crate::client::GraphClient;
use crate::dispatch::Dispatcher;

pub struct GroupsClient<'a, D> {
    graph: &'a GraphClient<D>,
}

impl<'a, D: Dispatcher> GroupsClient<'a, D> {
    pub fn new(graph: &'a GraphClient<D>) -> Self {
        Self { graph }
    }

    pub async fn create_group(
        &self,
        ctx: &CallContext,
        display_name: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Post, &ResourcePath::new("groups"), ctx)
            .with_body(GroupPayload::new(display_name).build());
        self.graph.send(request).await
    }

    /// Create a group and bind its initial members in the same request.
    pub async fn create_group_with_members<I, S>(
        &self,
        ctx: &CallContext,
        display_name: &str,
        user_ids: I,
    ) -> Result<D::Response, D::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let payload =
            GroupPayload::new(display_name).members(member_urls(self.graph.endpoint(), user_ids));
        let request = self
            .graph
            .request(Method::Post, &ResourcePath::new("groups"), ctx)
            .with_body(payload.build());
        self.graph.send(request).await
    }

    /// Rename a group.
    pub async fn update_group(
        &self,
        ctx: &CallContext,
        group_id: &str,
        display_name: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Patch, &group_path(group_id), ctx)
            .with_body(GroupPayload::new(display_name).build());
        self.graph.send(request).await
    }

    pub async fn get_group(
        &self,
        ctx: &CallContext,
        group_id: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self.graph.request(Method::Get, &group_path(group_id), ctx);
        self.graph.send(request).await
    }

    pub async fn get_groups(&self, ctx: &CallContext) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Get, &ResourcePath::new("groups"), ctx);
        self.graph.send(request).await
    }

    pub async fn delete_group(
        &self,
        ctx: &CallContext,
        group_id: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Delete, &group_path(group_id), ctx);
        self.graph.send(request).await
    }

    /// Add one member: `POST groups/<gid>/members/$ref` with an `@odata.id` reference.
    pub async fn add_user_to_group(
        &self,
        ctx: &CallContext,
        group_id: &str,
        user_id: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Post, &members_ref_path(group_id), ctx)
            .with_body(member_reference(self.graph.endpoint(), user_id));
        self.graph.send(request).await
    }

    /// Add several members: `POST groups/<gid>/users` with `members@odata.bind`.
    pub async fn add_users_to_group<I, S>(
        &self,
        ctx: &CallContext,
        group_id: &str,
        user_ids: I,
    ) -> Result<D::Response, D::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = group_path(group_id).segment("users");
        let request = self
            .graph
            .request(Method::Post, &path, ctx)
            .with_body(members_bind(self.graph.endpoint(), user_ids));
        self.graph.send(request).await
    }

    /// Bind members by patching the group itself. The server caps this at
    /// 20 references per request; the cap is not enforced here.
    pub async fn bind_group_members<I, S>(
        &self,
        ctx: &CallContext,
        group_id: &str,
        user_ids: I,
    ) -> Result<D::Response, D::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let request = self
            .graph
            .request(Method::Patch, &group_path(group_id), ctx)
            .with_body(members_bind(self.graph.endpoint(), user_ids));
        self.graph.send(request).await
    }

    pub async fn remove_user_from_group(
        &self,
        ctx: &CallContext,
        group_id: &str,
        user_id: &str,
    ) -> Result<D::Response, D::Error> {
        let request = self
            .graph
            .request(Method::Delete, &member_ref_path(group_id, user_id), ctx);
        self.graph.send(request).await
    }

    pub async fn get_members_list(
        &self,
        ctx: &CallContext,
        group_id: &str,
    ) -> Result<D::Response, D::Error> {
        let path = group_path(group_id).segment("members");
        let request = self.graph.request(Method::Get, &path, ctx);
        self.graph.send(request).await
    }
}

fn group_path(group_id: &str) -> ResourcePath {
    ResourcePath::new("groups").segment(group_id)
}
