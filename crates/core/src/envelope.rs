use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::auth::{CallContext, Credentials};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Headers injected into every request that carries a body.
pub const DEFAULT_BODY_HEADERS: &[(&str, &str)] = &[(CONTENT_TYPE, APPLICATION_JSON)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body. `Raw` is sent byte-for-byte, so callers can pass bodies
/// the builders would never produce (including invalid JSON).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    Json(Value),
    Raw(String),
}

impl Body {
    /// The literal empty object `{}`.
    pub fn empty_object() -> Self {
        Body::Json(Value::Object(serde_json::Map::new()))
    }

    pub fn to_text(&self) -> String {
        match self {
            Body::Json(value) => value.to_string(),
            Body::Raw(text) => text.clone(),
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Raw(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Raw(text.to_string())
    }
}

/// Ordered header list with case-insensitive lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any existing value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.insert(name, value);
        }
        headers
    }
}

/// Everything a dispatcher needs to execute one request. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestEnvelope {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub credentials: Credentials,
    pub body: Option<Body>,
    pub request_id: String,
}

impl RequestEnvelope {
    pub fn new(method: Method, url: impl Into<String>, ctx: &CallContext) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Headers::new(),
            credentials: ctx.credentials.clone(),
            body: None,
            request_id: ctx.request_id.clone(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merge caller-supplied headers; later values win.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        for (name, value) in headers.0 {
            self.headers.insert(name, value);
        }
        self
    }

    /// Fill in [`DEFAULT_BODY_HEADERS`] for bodies, without overriding
    /// anything already set explicitly.
    pub fn apply_default_headers(mut self) -> Self {
        if self.body.is_some() {
            for (name, value) in DEFAULT_BODY_HEADERS {
                if !self.headers.contains(name) {
                    self.headers.insert(*name, *value);
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ctx() -> CallContext {
        CallContext::new(Credentials::new("admin", "admin"), "req-1")
    }

    #[test]
    fn headers_are_case_insensitive() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/plain");
        headers.insert("content-type", "application/json");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn default_headers_only_with_body() {
        let bare = RequestEnvelope::new(Method::Get, "https://h/graph/v1.0/users", &ctx())
            .apply_default_headers();
        assert!(bare.headers.is_empty());

        let with_body = RequestEnvelope::new(Method::Post, "https://h/graph/v1.0/users", &ctx())
            .with_body(json!({ "displayName": "x" }))
            .apply_default_headers();
        assert_eq!(with_body.headers.get(CONTENT_TYPE), Some(APPLICATION_JSON));
    }

    #[test]
    fn explicit_content_type_is_kept() {
        let env = RequestEnvelope::new(Method::Post, "u", &ctx())
            .with_header("content-type", "text/plain")
            .with_body("raw")
            .apply_default_headers();
        assert_eq!(env.headers.get(CONTENT_TYPE), Some("text/plain"));
        assert_eq!(env.headers.len(), 1);
    }

    #[test]
    fn empty_object_body() {
        assert_eq!(Body::empty_object().to_text(), "{}");
    }

    #[test]
    fn raw_body_is_verbatim() {
        let body = Body::from("{not json");
        assert_eq!(body.to_text(), "{not json");
    }

    #[test]
    fn envelope_serializes_without_secret() {
        let env = RequestEnvelope::new(Method::Delete, "https://h/graph/v1.0/drives/s1", &ctx())
            .with_header("Purge", "T");
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["method"], "DELETE");
        assert_eq!(value["headers"], json!([["Purge", "T"]]));
        assert_eq!(value["credentials"], json!({ "principal": "admin" }));
        assert_eq!(value["body"], Value::Null);
    }
}
