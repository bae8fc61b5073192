//! Loader that resolves one network's effective settings.
//!
//! The networks file is re-read on every call; nothing is cached between
//! calls, so edits on disk are picked up immediately.

use super::{artifact_defaults, scaffold, ArtifactDefaults, Config, ConfigValue, Network};
use super::{BUILD_DIR, NETWORKS_FILE};
use crate::error::{ConfigError, ConfigResult};
use contractctl_chain::{Address, ProviderResolvers};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Project configuration resolved for one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkConfig {
    /// Project-wide configuration
    pub config: Config,
    /// Name the network was requested by
    pub network_name: String,
    /// Raw network entry
    pub network: Network,
    /// Reconciled network identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<ConfigValue>,
    /// Resolved connection string
    pub provider: String,
    /// Project defaults overlaid with the network's own
    pub artifact_defaults: ArtifactDefaults,
}

impl NetworkConfig {
    pub fn build_dir(&self) -> &Path {
        &self.config.build_dir
    }

    /// Default sender as an account address, `None` when no `from` is set.
    pub fn sender(&self) -> ConfigResult<Option<Address>> {
        self.artifact_defaults.from_address()
    }
}

/// Reads `networks.toml` from a project root.
#[derive(Debug)]
pub struct NetworkConfigLoader {
    /// Project root directory
    root: PathBuf,
    /// Resolvers for `provider = { resolver = "..." }` entries
    resolvers: ProviderResolvers,
}

impl NetworkConfigLoader {
    /// Create a loader for the project at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            resolvers: ProviderResolvers::new(),
        }
    }

    /// Create a loader for the project in the current directory.
    pub fn from_current_dir() -> ConfigResult<Self> {
        let root = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
        Ok(Self::new(root))
    }

    pub fn with_resolvers(mut self, resolvers: ProviderResolvers) -> Self {
        self.resolvers = resolvers;
        self
    }

    pub fn resolvers_mut(&mut self) -> &mut ProviderResolvers {
        &mut self.resolvers
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn networks_file(&self) -> PathBuf {
        self.root.join(NETWORKS_FILE)
    }

    /// Scaffold the contracts directory and networks file if missing.
    pub fn initialize(&self) -> ConfigResult<()> {
        scaffold::initialize(&self.root)
    }

    /// Whether the project has a networks file.
    pub fn exists(&self) -> bool {
        self.networks_file().is_file()
    }

    /// Load the networks file, with defaults applied and the build
    /// directory set to `{root}/build/contracts`.
    pub fn config(&self) -> ConfigResult<Config> {
        let path = self.networks_file();
        debug!(file = %path.display(), "Loading networks file");

        let mut config = Config::from_file(&path)?;
        config.build_dir = build_dir_in(&self.root);
        Ok(config)
    }

    /// Names of all configured networks, sorted.
    pub fn network_names(&self) -> ConfigResult<Vec<String>> {
        Ok(self.config()?.network_names().map(str::to_string).collect())
    }

    /// Resolve the provider for a network entry using this loader's resolvers.
    pub fn provider(&self, network: &Network) -> ConfigResult<String> {
        network.provider(&self.resolvers)
    }

    /// Load the configuration and resolve the named network.
    pub fn load_network_config(&self, network_name: &str) -> ConfigResult<NetworkConfig> {
        info!(network = network_name, "Loading network configuration");

        let config = self.config()?;
        let network = config.network(network_name)?.clone();
        let network_id = network.network_id(network_name)?.cloned();
        let provider = self.provider(&network)?;
        let artifact_defaults = artifact_defaults(&config, &network);

        debug!(
            network = network_name,
            network_id = ?network_id,
            provider = %provider,
            "Network configuration resolved"
        );

        Ok(NetworkConfig {
            config,
            network_name: network_name.to_string(),
            network,
            network_id,
            provider,
            artifact_defaults,
        })
    }
}

fn build_dir_in(root: &Path) -> PathBuf {
    BUILD_DIR.iter().fold(root.to_path_buf(), |dir, part| dir.join(part))
}

/// Build output directory under the current working directory.
pub fn build_dir() -> ConfigResult<PathBuf> {
    let cwd = std::env::current_dir().map_err(ConfigError::CurrentDir)?;
    Ok(build_dir_in(&cwd))
}

/// Load a network from the project in the current directory.
pub fn load_network_config(network_name: &str) -> ConfigResult<NetworkConfig> {
    NetworkConfigLoader::from_current_dir()?.load_network_config(network_name)
}
