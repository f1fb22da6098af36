//! Process configuration.
//!
//! Three layers are merged into one immutable [`Configuration`], lowest
//! precedence first: the embedded defaults, an optional YAML file and the
//! command-line overrides. The merge is field-by-field; a layer overrides a
//! field only when it supplies a non-default value, so a file that sets only
//! `docker.registry` keeps every other default intact.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

/// Embedded default configuration, merged under any user-supplied layer.
static DEFAULT_CONFIGURATION: &str = include_str!("../default_configuration.yaml");

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("configuration path [{0}] is not a regular file")]
    InvalidPath(PathBuf),
    #[error("[{0}] is an invalid server port")]
    InvalidPort(u16),
    #[error("invalid docker registry configuration: {0}")]
    InvalidDockerConfig(&'static str),
}

/// Fully resolved process configuration.
///
/// Built once at startup by [`resolve`], read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Configuration {
    pub server: Server,
    pub docker: Docker,
}

/// Inbound HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub host: String,
    pub port: u16,
    pub graceful_timeout_ms: u64,
}

/// Registry connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Docker {
    pub protocol: String,
    pub registry: String,
    #[serde(default)]
    pub port: u16,
    /// Derived from `protocol`, `registry` and `port`; never user-supplied.
    #[serde(skip)]
    pub address: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Docker {
    /// Basic-auth credential pair, present only when both halves are set.
    ///
    /// A lone username or password is reported at client build time and
    /// ignored, so anonymous-read registries keep working.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() || self.password.is_empty() {
            return None;
        }
        Some((&self.username, &self.password))
    }

    fn derive_address(&self) -> String {
        if self.port != 0 {
            format!("{}{}:{}", self.protocol, self.registry, self.port)
        } else {
            format!("{}{}", self.protocol, self.registry)
        }
    }
}

/// Command-line overrides, highest precedence layer.
#[derive(Debug, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub docker: DockerOverrides,
}

/// Registry settings supplied on the command line.
#[derive(Debug, Default)]
pub struct DockerOverrides {
    pub registry: Option<String>,
    pub protocol: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Partial mirror of [`Configuration`] for the user-supplied file; only the
/// fields present in the document take part in the merge.
#[derive(Debug, Default, Deserialize)]
struct ConfigurationFile {
    #[serde(default)]
    server: ServerFile,
    #[serde(default)]
    docker: DockerFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerFile {
    host: Option<String>,
    port: Option<u16>,
    graceful_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct DockerFile {
    protocol: Option<String>,
    registry: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
}

/// Resolve the process configuration.
///
/// Layering order: embedded defaults, then the file named by
/// `overrides.config_path` (when set), then the command-line overrides.
/// The returned value has `docker.address` derived and has passed
/// validation.
pub fn resolve(overrides: Overrides) -> Result<Configuration, ConfigError> {
    // The embedded document failing to parse is a packaging defect.
    let mut config: Configuration = serde_yaml::from_str(DEFAULT_CONFIGURATION)?;

    if let Some(path) = &overrides.config_path {
        let file = load_configuration_file(path)?;
        debug!("merging loaded configuration with default");
        merge_file(&mut config, file);
    }

    merge_docker_overrides(&mut config.docker, overrides.docker);
    config.docker.address = config.docker.derive_address();
    validate(&config)?;

    Ok(config)
}

fn load_configuration_file(path: &Path) -> Result<ConfigurationFile, ConfigError> {
    let meta = std::fs::metadata(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        return Err(ConfigError::InvalidPath(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_yaml::from_str(&raw)?)
}

fn merge_file(config: &mut Configuration, file: ConfigurationFile) {
    merge_str(&mut config.server.host, file.server.host);
    merge_num(&mut config.server.port, file.server.port);
    merge_num(&mut config.server.graceful_timeout_ms, file.server.graceful_timeout_ms);

    merge_str(&mut config.docker.protocol, file.docker.protocol);
    merge_str(&mut config.docker.registry, file.docker.registry);
    merge_num(&mut config.docker.port, file.docker.port);
    merge_str(&mut config.docker.username, file.docker.username);
    merge_str(&mut config.docker.password, file.docker.password);
}

fn merge_docker_overrides(docker: &mut Docker, overrides: DockerOverrides) {
    merge_str(&mut docker.protocol, overrides.protocol);
    merge_str(&mut docker.registry, overrides.registry);
    merge_num(&mut docker.port, overrides.port);
    merge_str(&mut docker.username, overrides.username);
    merge_str(&mut docker.password, overrides.password);
}

fn merge_str(dst: &mut String, src: Option<String>) {
    if let Some(value) = src {
        if !value.is_empty() {
            *dst = value;
        }
    }
}

fn merge_num<T: Copy + Default + PartialEq>(dst: &mut T, src: Option<T>) {
    if let Some(value) = src {
        if value != T::default() {
            *dst = value;
        }
    }
}

fn validate(config: &Configuration) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::InvalidPort(config.server.port));
    }
    if config.docker.registry.is_empty() {
        return Err(ConfigError::InvalidDockerConfig(
            "no docker registry provided to connect to",
        ));
    }
    if config.docker.protocol.is_empty() {
        return Err(ConfigError::InvalidDockerConfig(
            "empty docker registry protocol provided",
        ));
    }

    // Not every registry requires authentication, just log it.
    if config.docker.username.is_empty() {
        warn!("no docker username set");
    }
    if config.docker.password.is_empty() {
        warn!("no docker password set");
    }

    Ok(())
}
