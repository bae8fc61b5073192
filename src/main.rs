//! contractctl
//!
//! Command-line front end for contract project network configuration:
//! - `init` scaffolds `contracts/` and `networks.toml`
//! - `status` reports whether the project has a networks file
//! - `networks` lists the configured networks
//! - `show <NETWORK>` prints the resolved configuration as JSON
//! - `build-dir` prints the build output directory

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use contractctl_core::{build_dir, NetworkConfigLoader, ProviderResolvers, NETWORKS_FILE};

/// Environment variable names.
mod env {
    pub const ROOT: &str = "CONTRACTCTL_ROOT";
    pub const RPC_URL: &str = "RPC_URL";
}

/// Command-line interface definition.
#[derive(Parser, Debug)]
#[command(
    name = "contractctl",
    author,
    version,
    about = "Network configuration for contract projects"
)]
struct Cli {
    /// Project root directory.
    #[arg(
        long = "root",
        env = env::ROOT,
        global = true,
        value_name = "PATH",
        help = "Optional. Project root containing networks.toml. Defaults to the current directory."
    )]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Command {
    /// Create the contracts directory and a default networks.toml.
    Init,
    /// Report whether networks.toml exists.
    Status,
    /// List configured networks.
    Networks,
    /// Print the resolved configuration of one network as JSON.
    Show {
        /// Network name as declared under [networks.<name>].
        network: String,
    },
    /// Print the build output directory under the current directory.
    BuildDir,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr, stdout carries command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,contractctl_core=info")),
        )
        .init();

    let cli = Cli::parse();

    let loader = match cli.root {
        Some(root) => NetworkConfigLoader::new(root),
        None => NetworkConfigLoader::from_current_dir()?,
    }
    .with_resolvers(default_resolvers());

    match cli.command {
        Command::Init => {
            loader
                .initialize()
                .with_context(|| format!("Failed to initialize {}", loader.root().display()))?;
            info!(root = %loader.root().display(), "Project initialized");
        }
        Command::Status => {
            if loader.exists() {
                println!("{} found at {}", NETWORKS_FILE, loader.networks_file().display());
            } else {
                println!(
                    "{} not found in {}, run `contractctl init`",
                    NETWORKS_FILE,
                    loader.root().display()
                );
            }
        }
        Command::Networks => {
            for name in loader.network_names()? {
                println!("{}", name);
            }
        }
        Command::Show { network } => {
            let resolved = loader
                .load_network_config(&network)
                .with_context(|| format!("Failed to load network '{}'", network))?;
            resolved
                .sender()
                .with_context(|| format!("Invalid default sender for network '{}'", network))?;
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        Command::BuildDir => {
            println!("{}", build_dir()?.display());
        }
    }

    Ok(())
}

/// Resolvers available to `provider = { resolver = "..." }` entries.
fn default_resolvers() -> ProviderResolvers {
    let mut resolvers = ProviderResolvers::new();
    resolvers.register("env", || {
        std::env::var(env::RPC_URL).with_context(|| format!("{} is not set", env::RPC_URL))
    });
    resolvers
}
