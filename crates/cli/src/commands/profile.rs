use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::{AppConfig, ProfileConfig};

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    action: ProfileAction,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Add a new profile
    Add {
        /// Profile name
        #[arg(long)]
        name: String,
        /// Service base URL, e.g. https://localhost:9200
        #[arg(long)]
        base_url: String,
        /// Graph API version segment
        #[arg(long, default_value = "v1.0")]
        api_version: String,
        /// User to authenticate as
        #[arg(long)]
        user: String,
        /// Password to store (prompted per call when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Accept invalid TLS certificates
        #[arg(long)]
        insecure: bool,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 120)]
        timeout_secs: u64,
    },
    /// List configured profiles
    List,
    /// Remove a profile
    Remove {
        /// Profile name to remove
        name: String,
    },
}

pub async fn run(args: ProfileArgs) -> Result<()> {
    match args.action {
        ProfileAction::Add {
            name,
            base_url,
            api_version,
            user,
            password,
            insecure,
            timeout_secs,
        } => {
            let mut config = AppConfig::load_or_default()?;
            if config.find_profile(&name).is_some() {
                anyhow::bail!("profile '{name}' already exists");
            }
            config.profiles.push(ProfileConfig {
                name: name.clone(),
                base_url,
                api_version,
                user,
                password,
                insecure,
                timeout_secs,
            });
            config.save()?;
            println!("Profile '{name}' added.");
        }
        ProfileAction::List => {
            let config = AppConfig::load_or_default()?;
            if config.profiles.is_empty() {
                println!("No profiles configured.");
            } else {
                println!("{:<20} {:<40} {:<20}", "NAME", "BASE URL", "USER");
                println!("{}", "-".repeat(80));
                for p in &config.profiles {
                    println!("{:<20} {:<40} {:<20}", p.name, p.base_url, p.user);
                }
            }
        }
        ProfileAction::Remove { name } => {
            let mut config = AppConfig::load()?;
            let before = config.profiles.len();
            config
                .profiles
                .retain(|p| !p.name.eq_ignore_ascii_case(&name));
            if config.profiles.len() == before {
                anyhow::bail!("profile '{name}' not found");
            }
            config.save()?;
            println!("Profile '{name}' removed.");
        }
    }
    Ok(())
}
