//! OData relationship bodies for group membership.
//!
//! Adding one member and binding several are different protocol shapes and
//! are not interchangeable. Removal has no body at all; the member is named
//! in the `$ref` path.

use serde_json::{Value, json};

use crate::endpoint::{ResourcePath, ServiceEndpoint};

pub const ODATA_ID_KEY: &str = "@odata.id";
pub const MEMBERS_BIND_KEY: &str = "members@odata.bind";

/// `{"@odata.id": "<user url>"}` for adding a single member.
pub fn member_reference(endpoint: &ServiceEndpoint, user_id: &str) -> Value {
    json!({ ODATA_ID_KEY: endpoint.user_url(user_id) })
}

/// Fully resolved user URLs, in input order.
pub fn member_urls<I, S>(endpoint: &ServiceEndpoint, user_ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    user_ids
        .into_iter()
        .map(|id| endpoint.user_url(id.as_ref()))
        .collect()
}

/// `{"members@odata.bind": [...]}` with one entry per user id, in input order.
pub fn members_bind<I, S>(endpoint: &ServiceEndpoint, user_ids: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    json!({ MEMBERS_BIND_KEY: member_urls(endpoint, user_ids) })
}

/// `groups/<gid>/members/$ref`
pub fn members_ref_path(group_id: &str) -> ResourcePath {
    ResourcePath::new("groups")
        .segment(group_id)
        .segment("members")
        .segment("$ref")
}

/// `groups/<gid>/members/<uid>/$ref`
pub fn member_ref_path(group_id: &str, user_id: &str) -> ResourcePath {
    ResourcePath::new("groups")
        .segment(group_id)
        .segment("members")
        .segment(user_id)
        .segment("$ref")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> ServiceEndpoint {
        ServiceEndpoint::new("https://ocis.test/")
    }

    #[test]
    fn single_reference() {
        let body = member_reference(&endpoint(), "u1");
        assert_eq!(
            body,
            json!({ "@odata.id": "https://ocis.test/graph/v1.0/users/u1" })
        );
    }

    #[test]
    fn bind_keeps_every_member_in_order() {
        let body = members_bind(&endpoint(), ["u3", "u1", "u2"]);
        assert_eq!(
            body,
            json!({
                "members@odata.bind": [
                    "https://ocis.test/graph/v1.0/users/u3",
                    "https://ocis.test/graph/v1.0/users/u1",
                    "https://ocis.test/graph/v1.0/users/u2",
                ]
            })
        );
    }

    #[test]
    fn bind_with_no_members() {
        let body = members_bind(&endpoint(), Vec::<String>::new());
        assert_eq!(body, json!({ "members@odata.bind": [] }));
    }

    #[test]
    fn ref_paths() {
        assert_eq!(members_ref_path("g1").as_str(), "groups/g1/members/$ref");
        assert_eq!(
            member_ref_path("g1", "u1").as_str(),
            "groups/g1/members/u1/$ref"
        );
    }
}
