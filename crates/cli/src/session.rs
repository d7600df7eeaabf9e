use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

use graphops_core::{CallContext, Credentials, ServiceEndpoint};
use graphops_graph::HttpConfig;

use crate::config::{AppConfig, ProfileConfig};

const PASSWORD_ENV: &str = "GRAPHOPS_PASSWORD";

/// Global options that pick the profile and the caller identity.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub profile: Option<String>,
    pub user: Option<String>,
    pub request_id: Option<String>,
}

/// Everything resolved from config and flags that a command needs to build requests.
pub struct Session {
    pub endpoint: ServiceEndpoint,
    pub http: HttpConfig,
    pub ctx: CallContext,
}

impl Session {
    pub fn open(opts: &SessionOptions) -> Result<Self> {
        let config = AppConfig::load()?;
        let profile = config.select_profile(opts.profile.as_deref())?;
        let credentials = resolve_credentials(profile, opts.user.as_deref())?;
        let request_id = opts
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        debug!(
            profile = %profile.name,
            principal = %credentials.principal,
            request_id = %request_id,
            "session opened"
        );

        Ok(Self {
            endpoint: profile.endpoint(),
            http: profile.http_config(),
            ctx: CallContext::new(credentials, request_id),
        })
    }
}

/// The profile's own password only applies to the profile's user; acting
/// as anyone else always needs the env var or a prompt.
fn resolve_credentials(profile: &ProfileConfig, user: Option<&str>) -> Result<Credentials> {
    let principal = user.unwrap_or(&profile.user);
    let stored = if principal == profile.user {
        profile.password.clone()
    } else {
        None
    };

    let secret = match stored {
        Some(password) => password,
        None => match std::env::var(PASSWORD_ENV) {
            Ok(password) => password,
            Err(_) => dialoguer::Password::new()
                .with_prompt(format!("Password for {principal}"))
                .interact()
                .context("failed to read password")?,
        },
    };

    Ok(Credentials::new(principal, secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileConfig {
        ProfileConfig {
            name: "local".into(),
            base_url: "https://localhost:9200".into(),
            api_version: "v1.0".into(),
            user: "admin".into(),
            password: Some("admin".into()),
            insecure: true,
            timeout_secs: 30,
        }
    }

    #[test]
    fn stored_password_for_profile_user() {
        let creds = resolve_credentials(&profile(), None).unwrap();
        assert_eq!(creds, Credentials::new("admin", "admin"));

        let creds = resolve_credentials(&profile(), Some("admin")).unwrap();
        assert_eq!(creds.secret, "admin");
    }
}
