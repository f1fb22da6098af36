use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use registry_gui::config::{self, DockerOverrides, Overrides};
use registry_gui::{v2, web};

/// A read-only web UI for browsing a Docker Registry.
#[derive(Debug, Parser)]
#[command(name = "registry-gui", version, about)]
struct Cli {
    /// Path to a YAML configuration file, merged over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the docker registry, without port or protocol.
    #[arg(long = "registry-name")]
    registry_name: Option<String>,

    /// Protocol for the docker registry (defaults to "https://").
    #[arg(long = "registry-protocol")]
    registry_protocol: Option<String>,

    /// Port for the docker registry; by default the protocol's port is used.
    #[arg(long = "registry-port")]
    registry_port: Option<u16>,

    /// Username for the docker registry.
    #[arg(long = "registry-username")]
    registry_username: Option<String>,

    /// Password for the docker registry.
    #[arg(long = "registry-password")]
    registry_password: Option<String>,
}

impl Cli {
    fn into_overrides(self) -> Overrides {
        Overrides {
            config_path: self.config,
            docker: DockerOverrides {
                registry: self.registry_name,
                protocol: self.registry_protocol,
                port: self.registry_port,
                username: self.registry_username,
                password: self.registry_password,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::resolve(cli.into_overrides())?;

    let credentials = config.docker.credentials();
    let client = v2::Client::configure()
        .address(&config.docker.address)
        .username(credentials.map(|(u, _)| u.to_string()))
        .password(credentials.map(|(_, p)| p.to_string()))
        .build()?;

    // Startup connectivity check: a misconfigured or unreachable registry
    // should stop the process before it starts serving.
    if client
        .is_v2_supported()
        .await
        .with_context(|| format!("failed to reach registry {}", config.docker.registry))?
    {
        info!("successfully connected to registry {}", config.docker.registry);
    } else {
        anyhow::bail!("failed to connect to registry {}", config.docker.registry);
    }

    info!("starting registry-gui");
    let state = web::AppState::new(client, config.docker.registry.clone())?;
    web::run(&config, state).await
}
