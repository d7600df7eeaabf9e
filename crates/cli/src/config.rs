use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use graphops_core::ServiceEndpoint;
use graphops_core::endpoint::DEFAULT_API_VERSION;
use graphops_graph::HttpConfig;

const CONFIG_FILE: &str = "graphops.toml";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub base_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    pub user: String,
    /// Left out to be prompted for (or read from `GRAPHOPS_PASSWORD`).
    pub password: Option<String>,
    #[serde(default)]
    pub insecure: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AppConfig {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("graphops")
            .join(CONFIG_FILE)
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("config not found at {}", path.display()))?;
        Self::parse(&content)
    }

    /// Like [`AppConfig::load`], but an absent file yields an empty config.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load()
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config")
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn find_profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The named profile, or the first one when no name is given.
    pub fn select_profile(&self, name: Option<&str>) -> Result<&ProfileConfig> {
        match name {
            Some(name) => self
                .find_profile(name)
                .ok_or_else(|| anyhow::anyhow!("profile '{name}' not found")),
            None => self
                .profiles
                .first()
                .ok_or_else(|| anyhow::anyhow!("no profiles configured, run `graphops profile add`")),
        }
    }
}

impl ProfileConfig {
    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(&self.base_url).with_api_version(&self.api_version)
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            insecure: self.insecure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_defaults() {
        let config = AppConfig::parse(
            r#"
            [[profiles]]
            name = "local"
            base_url = "https://localhost:9200"
            user = "admin"
            "#,
        )
        .unwrap();
        let profile = config.select_profile(None).unwrap();
        assert_eq!(profile.api_version, "v1.0");
        assert_eq!(profile.timeout_secs, 120);
        assert!(!profile.insecure);
        assert!(profile.password.is_none());
        assert_eq!(
            profile.endpoint().resolve("users"),
            "https://localhost:9200/graph/v1.0/users"
        );
    }

    #[test]
    fn select_by_name_is_case_insensitive() {
        let config = AppConfig::parse(
            r#"
            [[profiles]]
            name = "local"
            base_url = "https://localhost:9200"
            user = "admin"

            [[profiles]]
            name = "Staging"
            base_url = "https://staging.example.com/"
            api_version = "v1beta1"
            user = "ci"
            password = "ci-secret"
            insecure = true
            "#,
        )
        .unwrap();
        let profile = config.select_profile(Some("staging")).unwrap();
        assert_eq!(profile.user, "ci");
        assert!(profile.http_config().insecure);
        assert_eq!(
            profile.endpoint().resolve("drives"),
            "https://staging.example.com/graph/v1beta1/drives"
        );
        assert!(config.select_profile(Some("prod")).is_err());
    }

    #[test]
    fn empty_config_has_no_default_profile() {
        let config = AppConfig::parse("").unwrap();
        assert!(config.select_profile(None).is_err());
    }
}
