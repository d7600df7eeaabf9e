use anyhow::{Context, Result};
use clap::Args;

use graphops_core::CallContext;
use graphops_core::payload::PasswordChange;
use graphops_graph::{Dispatcher, GraphClient};

use super::send;
use crate::output::{Report, View};

#[derive(Args)]
pub struct PasswordArgs {
    /// Current password (defaults to the password used to authenticate)
    #[arg(long)]
    current: Option<String>,
    /// New password (prompted when omitted)
    #[arg(long)]
    new: Option<String>,
}

pub async fn run<D>(args: PasswordArgs, graph: &GraphClient<D>, ctx: &CallContext) -> Result<()>
where
    D: Dispatcher,
    D::Response: Report,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    let current = args
        .current
        .unwrap_or_else(|| ctx.credentials.secret.clone());
    let new = match args.new {
        Some(new) => new,
        None => dialoguer::Password::new()
            .with_prompt("New password")
            .with_confirmation("Repeat new password", "Passwords do not match")
            .interact()
            .context("failed to read new password")?,
    };

    let change = PasswordChange::new(current, new);
    send(
        "Changing password...",
        graph.me().change_own_password(ctx, &change),
        View::Raw,
    )
    .await
}
