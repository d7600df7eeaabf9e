pub mod auth;
pub mod endpoint;
pub mod envelope;
pub mod payload;
pub mod relationship;
pub mod space;

pub use auth::{CallContext, Credentials};
pub use endpoint::{ResourcePath, ServiceEndpoint, resolve};
pub use envelope::{Body, Headers, Method, RequestEnvelope};
pub use space::{DeleteMode, SpaceUpdate};
