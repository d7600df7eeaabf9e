pub mod client;
pub mod dispatch;
pub mod drives;
pub mod groups;
pub mod http;
pub mod me;
pub mod models;
pub mod recording;
pub mod users;

pub use client::GraphClient;
pub use dispatch::Dispatcher;
pub use http::{DispatchError, HttpConfig, ReqwestDispatcher};
pub use recording::RecordingDispatcher;
