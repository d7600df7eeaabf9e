//! Request bodies for create and partial-update operations.
//!
//! Create payloads always carry every recognized field and apply defaults.
//! Patch payloads carry only what the caller supplied: an absent field is
//! left out of the JSON entirely, never sent as `null`. Because of that, a
//! patch cannot clear a field.

use serde_json::{Map, Value, json};

use crate::relationship::MEMBERS_BIND_KEY;

/// Domain used for the fallback mail address of a created user.
pub const DEFAULT_MAIL_DOMAIN: &str = "example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreatePayload {
    pub account_name: String,
    pub password: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl UserCreatePayload {
    pub fn new(account_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            password: password.into(),
            display_name: None,
            email: None,
        }
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Full create body. `displayName` falls back to the account name and
    /// `mail` to `<account>@example.com`.
    pub fn build(&self) -> Value {
        let display_name = self
            .display_name
            .clone()
            .unwrap_or_else(|| self.account_name.clone());
        let mail = self
            .email
            .clone()
            .unwrap_or_else(|| format!("{}@{DEFAULT_MAIL_DOMAIN}", self.account_name));
        json!({
            "onPremisesSamAccountName": self.account_name,
            "passwordProfile": { "password": self.password },
            "displayName": display_name,
            "mail": mail,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatchPayload {
    pub account_name: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl UserPatchPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Partial body with only the supplied, non-empty fields.
    pub fn build(&self) -> Value {
        let mut body = Map::new();
        if let Some(name) = present(&self.account_name) {
            body.insert("onPremisesSamAccountName".into(), json!(name));
        }
        if let Some(password) = present(&self.password) {
            body.insert("passwordProfile".into(), json!({ "password": password }));
        }
        if let Some(display_name) = present(&self.display_name) {
            body.insert("displayName".into(), json!(display_name));
        }
        if let Some(mail) = present(&self.email) {
            body.insert("mail".into(), json!(mail));
        }
        Value::Object(body)
    }
}

/// Body for group create and rename, optionally binding initial members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPayload {
    pub display_name: String,
    pub member_urls: Vec<String>,
}

impl GroupPayload {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            member_urls: Vec::new(),
        }
    }

    /// Bind members by their fully resolved user URLs.
    pub fn members(mut self, member_urls: Vec<String>) -> Self {
        self.member_urls = member_urls;
        self
    }

    pub fn build(&self) -> Value {
        let mut body = Map::new();
        body.insert("displayName".into(), json!(self.display_name));
        if !self.member_urls.is_empty() {
            body.insert(MEMBERS_BIND_KEY.into(), json!(self.member_urls));
        }
        Value::Object(body)
    }
}

/// Space (drive) body for create or update. Same presence rules as
/// [`UserPatchPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacePayload {
    pub name: Option<String>,
    pub drive_type: Option<String>,
    pub description: Option<String>,
    pub drive_alias: Option<String>,
    pub quota_total: Option<u64>,
}

impl SpacePayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn drive_type(mut self, drive_type: impl Into<String>) -> Self {
        self.drive_type = Some(drive_type.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn drive_alias(mut self, drive_alias: impl Into<String>) -> Self {
        self.drive_alias = Some(drive_alias.into());
        self
    }

    pub fn quota_total(mut self, bytes: u64) -> Self {
        self.quota_total = Some(bytes);
        self
    }

    pub fn build(&self) -> Value {
        let mut body = Map::new();
        if let Some(name) = present(&self.name) {
            body.insert("name".into(), json!(name));
        }
        if let Some(drive_type) = present(&self.drive_type) {
            body.insert("driveType".into(), json!(drive_type));
        }
        if let Some(description) = present(&self.description) {
            body.insert("description".into(), json!(description));
        }
        if let Some(alias) = present(&self.drive_alias) {
            body.insert("driveAlias".into(), json!(alias));
        }
        if let Some(total) = self.quota_total {
            body.insert("quota".into(), json!({ "total": total }));
        }
        Value::Object(body)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn new(current_password: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
        }
    }

    pub fn build(&self) -> Value {
        json!({
            "currentPassword": self.current_password,
            "newPassword": self.new_password,
        })
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
