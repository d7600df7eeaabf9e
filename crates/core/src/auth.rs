use std::fmt;

use serde::Serialize;

/// Principal/secret pair forwarded opaquely with every request.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub principal: String,
    #[serde(skip_serializing)]
    pub secret: String,
}

impl Credentials {
    pub fn new(principal: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("principal", &self.principal)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Per-call caller identity: credentials plus the correlation id used for tracing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallContext {
    pub credentials: Credentials,
    pub request_id: String,
}

impl CallContext {
    pub fn new(credentials: Credentials, request_id: impl Into<String>) -> Self {
        Self {
            credentials,
            request_id: request_id.into(),
        }
    }
}
