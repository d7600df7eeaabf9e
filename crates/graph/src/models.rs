//! Response shapes for callers that want to decode bodies. The operations
//! themselves never deserialize anything.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(rename = "onPremisesSamAccountName")]
    pub on_premises_sam_account_name: Option<String>,
    pub mail: Option<String>,
    #[serde(rename = "memberOf", default)]
    pub member_of: Vec<Group>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub members: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Drive {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "driveType")]
    pub drive_type: Option<String>,
    #[serde(rename = "driveAlias")]
    pub drive_alias: Option<String>,
    pub description: Option<String>,
    pub quota: Option<Quota>,
    pub root: Option<DriveRoot>,
    #[serde(rename = "webUrl")]
    pub web_url: Option<String>,
    #[serde(rename = "lastModifiedDateTime")]
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quota {
    pub total: Option<i64>,
    pub used: Option<i64>,
    pub remaining: Option<i64>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveRoot {
    pub id: Option<String>,
    #[serde(rename = "webDavUrl")]
    pub web_dav_url: Option<String>,
    /// Present on disabled spaces.
    pub deleted: Option<Deleted>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    pub state: Option<String>,
}

/// Lifecycle state observable from a listed space. A purged space is no
/// longer listed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceState {
    Active,
    Disabled,
}

impl std::fmt::Display for SpaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceState::Active => f.pad("active"),
            SpaceState::Disabled => f.pad("disabled"),
        }
    }
}

impl Drive {
    pub fn state(&self) -> SpaceState {
        let trashed = self
            .root
            .as_ref()
            .and_then(|r| r.deleted.as_ref())
            .and_then(|d| d.state.as_deref())
            == Some("trashed");
        if trashed {
            SpaceState::Disabled
        } else {
            SpaceState::Active
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphPage<T> {
    pub value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    pub next_link: Option<String>,
}

/// OData error body, e.g. `{"error":{"code":"invalidRequest","message":"..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
