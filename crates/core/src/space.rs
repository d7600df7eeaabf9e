use crate::envelope::{Body, Headers};

pub const PURGE_HEADER: &str = "Purge";
pub const PURGE_VALUE: &str = "T";
pub const RESTORE_HEADER: &str = "restore";
pub const RESTORE_VALUE: &str = "true";

/// How a space is deleted. Both variants are `DELETE drives/<id>`; only the
/// `Purge` header tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    /// Disable the space. It can be restored later.
    Soft,
    /// Remove the space permanently. Only a disabled space can be purged.
    Purge,
}

impl DeleteMode {
    pub fn headers(&self) -> Headers {
        match self {
            DeleteMode::Soft => Headers::new(),
            DeleteMode::Purge => [(PURGE_HEADER, PURGE_VALUE)].into_iter().collect(),
        }
    }
}

/// What a `PATCH drives/<id>` means.
#[derive(Debug, Clone, PartialEq)]
pub enum SpaceUpdate {
    /// Generic update with a caller-supplied body and extra headers.
    Update { body: Body, headers: Headers },
    /// Re-enable a disabled space: `restore: true` and the literal body `{}`.
    Restore,
}

impl SpaceUpdate {
    pub fn update(body: impl Into<Body>) -> Self {
        SpaceUpdate::Update {
            body: body.into(),
            headers: Headers::new(),
        }
    }

    /// Resolve the variant into the body and headers that go on the wire.
    pub fn into_parts(self) -> (Body, Headers) {
        match self {
            SpaceUpdate::Update { body, headers } => (body, headers),
            SpaceUpdate::Restore => (
                Body::empty_object(),
                [(RESTORE_HEADER, RESTORE_VALUE)].into_iter().collect(),
            ),
        }
    }
}
