use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use graphops_core::payload::SpacePayload;
use graphops_core::{Body, CallContext, Headers};
use graphops_graph::{Dispatcher, GraphClient};

use super::send;
use crate::output::{Report, View};

#[derive(Args)]
pub struct SpaceArgs {
    #[command(subcommand)]
    action: SpaceAction,
}

/// Body fields shared by create and update. `--body` overrides all of them.
#[derive(Args)]
struct SpaceFields {
    /// Space name
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// Space alias
    #[arg(long)]
    alias: Option<String>,
    /// Quota in bytes
    #[arg(long)]
    quota: Option<u64>,
    /// Raw request body, sent verbatim
    #[arg(long, conflicts_with_all = ["name", "description", "alias", "quota"])]
    body: Option<String>,
    /// Extra header as NAME:VALUE (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    headers: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum SpaceAction {
    /// Create a space
    Create {
        /// Drive type
        #[arg(long, default_value = "project")]
        drive_type: String,
        #[command(flatten)]
        fields: SpaceFields,
    },
    /// Update a space
    Update {
        /// Space id
        id: String,
        #[command(flatten)]
        fields: SpaceFields,
    },
    /// List spaces
    List {
        /// Only the caller's own spaces (me/drives)
        #[arg(long)]
        mine: bool,
        /// Query or path suffix, e.g. "?$filter=driveType eq 'project'"
        #[arg(long)]
        query: Option<String>,
    },
    /// Show one space
    Get {
        /// Space id
        id: String,
        /// Path or query suffix appended after the id
        #[arg(long)]
        suffix: Option<String>,
    },
    /// Disable a space (it can be restored)
    Disable {
        /// Space id
        id: String,
    },
    /// Restore a disabled space
    Restore {
        /// Space id
        id: String,
    },
    /// Permanently delete a disabled space
    Delete {
        /// Space id
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

impl SpaceFields {
    fn into_request(self, drive_type: Option<String>) -> (Body, Headers) {
        let headers = self.headers.into_iter().collect();
        if let Some(raw) = self.body {
            return (Body::Raw(raw), headers);
        }
        let payload = SpacePayload {
            name: self.name,
            drive_type,
            description: self.description,
            drive_alias: self.alias,
            quota_total: self.quota,
        };
        (Body::Json(payload.build()), headers)
    }
}

fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:VALUE, got '{s}'"))?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

pub async fn run<D>(args: SpaceArgs, graph: &GraphClient<D>, ctx: &CallContext) -> Result<()>
where
    D: Dispatcher,
    D::Response: Report,
    D::Error: std::error::Error + Send + Sync + 'static,
{
    let drives = graph.drives();
    match args.action {
        SpaceAction::Create { drive_type, fields } => {
            let (body, headers) = fields.into_request(Some(drive_type));
            send(
                "Creating space...",
                drives.create_space(ctx, body, headers),
                View::Raw,
            )
            .await
        }
        SpaceAction::Update { id, fields } => {
            let (body, headers) = fields.into_request(None);
            send(
                "Updating space...",
                drives.update_space(ctx, &id, body, headers),
                View::Raw,
            )
            .await
        }
        SpaceAction::List { mine, query } => {
            if mine {
                send(
                    "Listing spaces...",
                    drives.get_my_spaces(ctx, query.as_deref()),
                    View::Spaces,
                )
                .await
            } else {
                send(
                    "Listing spaces...",
                    drives.get_all_spaces(ctx, query.as_deref()),
                    View::Spaces,
                )
                .await
            }
        }
        SpaceAction::Get { id, suffix } => {
            send(
                "Fetching space...",
                drives.get_single_space(ctx, &id, suffix.as_deref()),
                View::Raw,
            )
            .await
        }
        SpaceAction::Disable { id } => {
            send("Disabling space...", drives.disable_space(ctx, &id), View::Raw).await
        }
        SpaceAction::Restore { id } => {
            send("Restoring space...", drives.restore_space(ctx, &id), View::Raw).await
        }
        SpaceAction::Delete { id, yes } => {
            if !yes {
                let confirmed = dialoguer::Confirm::new()
                    .with_prompt(format!("Permanently delete space {id}? This cannot be undone"))
                    .default(false)
                    .interact()
                    .context("failed to read confirmation")?;
                if !confirmed {
                    println!("Aborted.");
                    return Ok(());
                }
            }
            send("Purging space...", drives.delete_space(ctx, &id), View::Raw).await
        }
    }
}
