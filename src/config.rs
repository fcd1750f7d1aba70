use std::env;

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

/// Build provenance of the running container image.
///
/// Each field is independently optional; an unset variable stays `None`
/// and serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ContainerInfo {
    pub image_id: Option<String>,
    pub image_version: Option<String>,
    pub image_codename: Option<String>,
    pub image_pretty_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Application metadata
    pub ipam_version: String,
    pub container: ContainerInfo,
    pub deployment: Deployment,

    // API settings
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Empty` when `IPAM_VERSION` is blank and
    /// `ConfigError::Invalid` when `API_PORT` is not a port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ipam_version = match lookup("IPAM_VERSION") {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::Empty("IPAM_VERSION")),
            Some(v) => v,
            None => env!("CARGO_PKG_VERSION").to_string(),
        };

        let api_port = match lookup("API_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "API_PORT",
                value: raw,
            })?,
            None => 8080,
        };

        Ok(Self {
            ipam_version,
            container: ContainerInfo {
                image_id: lookup("VITE_CONTAINER_IMAGE_ID"),
                image_version: lookup("VITE_CONTAINER_IMAGE_VERSION"),
                image_codename: lookup("VITE_CONTAINER_IMAGE_CODENAME"),
                image_pretty_name: lookup("VITE_CONTAINER_IMAGE_PRETTY_NAME"),
            },
            deployment: Deployment::from_str(
                &lookup("DEPLOYMENT").unwrap_or_else(|| "local".to_string()),
            ),

            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port,
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} must not be empty")]
    Empty(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.ipam_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.container, ContainerInfo::default());
        assert_eq!(config.deployment, Deployment::Local);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_container_metadata() {
        let config = load(&[
            ("IPAM_VERSION", "3.4.0"),
            ("VITE_CONTAINER_IMAGE_ID", "debian"),
            ("VITE_CONTAINER_IMAGE_VERSION", "12"),
            ("VITE_CONTAINER_IMAGE_CODENAME", "bookworm"),
            ("VITE_CONTAINER_IMAGE_PRETTY_NAME", "Debian GNU/Linux 12 (bookworm)"),
        ])
        .unwrap();

        assert_eq!(config.ipam_version, "3.4.0");
        assert_eq!(config.container.image_id.as_deref(), Some("debian"));
        assert_eq!(config.container.image_version.as_deref(), Some("12"));
        assert_eq!(config.container.image_codename.as_deref(), Some("bookworm"));
        assert_eq!(
            config.container.image_pretty_name.as_deref(),
            Some("Debian GNU/Linux 12 (bookworm)")
        );
    }

    #[test]
    fn empty_container_value_is_kept() {
        let config = load(&[("VITE_CONTAINER_IMAGE_ID", "")]).unwrap();
        assert_eq!(config.container.image_id.as_deref(), Some(""));
    }

    #[test]
    fn blank_version_is_rejected() {
        let err = load(&[("IPAM_VERSION", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::Empty("IPAM_VERSION")));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = load(&[("API_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "API_PORT", .. }));
    }

    #[test]
    fn deployment_aliases() {
        assert_eq!(Deployment::from_str("Production"), Deployment::Prod);
        assert_eq!(Deployment::from_str("staging"), Deployment::Stage);
        assert_eq!(Deployment::from_str("dev"), Deployment::Dev);
        assert_eq!(Deployment::from_str("anything"), Deployment::Local);
    }
}
