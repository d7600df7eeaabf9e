use anyhow::Result;
use clap::{Args, Subcommand};

use graphops_core::CallContext;
use graphops_core::payload::{UserCreatePayload, UserPatchPayload};
use graphops_graph::{Dispatcher, GraphClient};

use super::send;
use crate::output::{Report, View};

#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    action: UserAction,
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user (display name and mail default from the account name)
    Create {
        /// Account name (onPremisesSamAccountName)
        name: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Change selected attributes of a user
    Edit {
        /// User id or account name
        id: String,
        /// New account name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Show one user
    Get {
        /// User id or account name
        id: String,
    },
    /// List all users
    List,
    /// Delete a user
    Delete {
        /// User id or account name
        id: String,
    },
}

pub async fn run<D>(args: UserArgs, graph: &GraphClient<D>, ctx: &CallContext) -> Result<()>
where
    D: Dispatcher,
    D::Response: Report,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    let users = graph.users();
    match args.action {
        UserAction::Create {
            name,
            password,
            email,
            display_name,
        } => {
            let payload = UserCreatePayload {
                account_name: name,
                password,
                display_name,
                email,
            };
            send("Creating user...", users.create_user(ctx, &payload), View::Raw).await
        }
        UserAction::Edit {
            id,
            name,
            password,
            email,
            display_name,
        } => {
            let payload = UserPatchPayload {
                account_name: name,
                password,
                display_name,
                email,
            };
            send("Updating user...", users.edit_user(ctx, &id, &payload), View::Raw).await
        }
        UserAction::Get { id } => {
            send("Fetching user...", users.get_user(ctx, &id), View::Raw).await
        }
        UserAction::List => send("Listing users...", users.get_users(ctx), View::Users).await,
        UserAction::Delete { id } => {
            send("Deleting user...", users.delete_user(ctx, &id), View::Raw).await
        }
    }
}
