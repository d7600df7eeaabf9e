pub mod group;
pub mod password;
pub mod profile;
pub mod space;
pub mod user;

use std::future::Future;

use anyhow::Result;
use clap::Subcommand;

use graphops_core::CallContext;
use graphops_graph::{Dispatcher, GraphClient};

use crate::output::{Report, View};
use crate::progress;

#[derive(Subcommand)]
pub enum Command {
    /// Manage connection profiles
    Profile(profile::ProfileArgs),
    /// Create, edit, inspect and delete users
    User(user::UserArgs),
    /// Manage groups and their members
    Group(group::GroupArgs),
    /// Manage spaces (drives) through their lifecycle
    Space(space::SpaceArgs),
    /// Change the calling user's own password
    Password(password::PasswordArgs),
}

/// Run a command that talks to the service.
pub async fn execute<D>(command: Command, graph: &GraphClient<D>, ctx: &CallContext) -> Result<()>
where
    D: Dispatcher,
    D::Response: Report,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    match command {
        Command::Profile(args) => profile::run(args).await,
        Command::User(args) => user::run(args, graph, ctx).await,
        Command::Group(args) => group::run(args, graph, ctx).await,
        Command::Space(args) => space::run(args, graph, ctx).await,
        Command::Password(args) => password::run(args, graph, ctx).await,
    }
}

/// Await one request behind a spinner and print its outcome.
pub(crate) async fn send<F, R, E>(label: &str, request: F, view: View) -> Result<()>
where
    F: Future<Output = Result<R, E>>,
    R: Report,
    E: std::error::Error + Send + Sync + 'static,
{
    let spinner = progress::create_spinner(label);
    let result = request.await;
    spinner.finish_and_clear();
    result?.report(view).await
}
