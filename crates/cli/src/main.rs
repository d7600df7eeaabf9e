mod commands;
mod config;
mod output;
mod progress;
mod session;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use graphops_graph::{GraphClient, RecordingDispatcher, ReqwestDispatcher};

use crate::session::{Session, SessionOptions};

#[derive(Parser)]
#[command(
    name = "graphops",
    version,
    about = "Drive a Graph-style user, group and space API"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Profile to use (default: the first configured one)
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Authenticate as this user instead of the profile's user
    #[arg(long = "as", global = true)]
    as_user: Option<String>,

    /// Correlation id sent as X-Request-ID (default: random UUID)
    #[arg(long, global = true)]
    request_id: Option<String>,

    /// Print the request instead of sending it
    #[arg(long, global = true)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let commands::Command::Profile(args) = cli.command {
        return commands::profile::run(args).await;
    }

    let session = Session::open(&SessionOptions {
        profile: cli.profile,
        user: cli.as_user,
        request_id: cli.request_id,
    })?;

    if cli.dry_run {
        info!("dry run, nothing will be sent");
        let graph = GraphClient::new(session.endpoint, RecordingDispatcher::new());
        commands::execute(cli.command, &graph, &session.ctx).await
    } else {
        let dispatcher = ReqwestDispatcher::new(&session.http)?;
        let graph = GraphClient::new(session.endpoint, dispatcher);
        commands::execute(cli.command, &graph, &session.ctx).await
    }
}
