use anyhow::Result;
use clap::{Args, Subcommand};

use graphops_core::CallContext;
use graphops_graph::{Dispatcher, GraphClient};

use super::send;
use crate::output::{Report, View};

#[derive(Args)]
pub struct GroupArgs {
    #[command(subcommand)]
    action: GroupAction,
}

#[derive(Subcommand)]
enum GroupAction {
    /// Create a group, optionally with initial members
    Create {
        /// Display name
        name: String,
        /// User id to bind as member (repeatable)
        #[arg(long = "member")]
        members: Vec<String>,
    },
    /// Rename a group
    Rename {
        /// Group id
        id: String,
        /// New display name
        name: String,
    },
    /// Show one group
    Get {
        /// Group id
        id: String,
    },
    /// List all groups
    List,
    /// Delete a group
    Delete {
        /// Group id
        id: String,
    },
    /// Add a single user to a group
    AddMember {
        /// Group id
        group: String,
        /// User id
        user: String,
    },
    /// Add several users to a group in one request
    AddMembers {
        /// Group id
        group: String,
        /// User ids
        #[arg(required = true, num_args = 1..)]
        users: Vec<String>,
        /// Bind by patching the group instead of posting to its users collection
        #[arg(long)]
        patch: bool,
    },
    /// Remove a user from a group
    RemoveMember {
        /// Group id
        group: String,
        /// User id
        user: String,
    },
    /// List the members of a group
    Members {
        /// Group id
        group: String,
    },
}

pub async fn run<D>(args: GroupArgs, graph: &GraphClient<D>, ctx: &CallContext) -> Result<()>
where
    D: Dispatcher,
    D::Response: Report,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    let groups = graph.groups();
    match args.action {
        GroupAction::Create { name, members } => {
            if members.is_empty() {
                send("Creating group...", groups.create_group(ctx, &name), View::Raw).await
            } else {
                send(
                    "Creating group...",
                    groups.create_group_with_members(ctx, &name, &members),
                    View::Raw,
                )
                .await
            }
        }
        GroupAction::Rename { id, name } => {
            send("Renaming group...", groups.update_group(ctx, &id, &name), View::Raw).await
        }
        GroupAction::Get { id } => {
            send("Fetching group...", groups.get_group(ctx, &id), View::Raw).await
        }
        GroupAction::List => send("Listing groups...", groups.get_groups(ctx), View::Groups).await,
        GroupAction::Delete { id } => {
            send("Deleting group...", groups.delete_group(ctx, &id), View::Raw).await
        }
        GroupAction::AddMember { group, user } => {
            send(
                "Adding member...",
                groups.add_user_to_group(ctx, &group, &user),
                View::Raw,
            )
            .await
        }
        GroupAction::AddMembers {
            group,
            users,
            patch,
        } => {
            if patch {
                send(
                    "Binding members...",
                    groups.bind_group_members(ctx, &group, &users),
                    View::Raw,
                )
                .await
            } else {
                send(
                    "Adding members...",
                    groups.add_users_to_group(ctx, &group, &users),
                    View::Raw,
                )
                .await
            }
        }
        GroupAction::RemoveMember { group, user } => {
            send(
                "Removing member...",
                groups.remove_user_from_group(ctx, &group, &user),
                View::Raw,
            )
            .await
        }
        GroupAction::Members { group } => {
            send(
                "Listing members...",
                groups.get_members_list(ctx, &group),
                View::Users,
            )
            .await
        }
    }
}
