//! Contract project configuration.
//!
//! Loads `networks.toml` from a project root, resolves one network's
//! provider and transaction defaults, and scaffolds new projects.

pub mod config;
mod error;

pub use config::{
    artifact_defaults, build_dir, default_compilers, initialize, load_network_config,
    ArtifactDefaults, CompilersInfo, Config, ConfigValue, Network, NetworkConfig,
    NetworkConfigLoader, BLUEPRINT, NETWORKS_FILE,
};
pub use error::{ConfigError, ConfigResult};

pub use contractctl_chain::{PortValue, ProviderError, ProviderResolvers, ProviderSpec};
