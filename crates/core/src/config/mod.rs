//! Network configuration for contract deployments.
//!
//! This module provides:
//! - Project configuration read from `networks.toml`
//! - Per-network settings with provider resolution
//! - Transaction defaults merged from project and network levels
//! - First-run scaffolding of the project layout
//! - The loader that ties everything together

mod artifacts;
mod loader;
mod network;
mod project;
mod scaffold;

/// Networks file, relative to the project root.
pub const NETWORKS_FILE: &str = "networks.toml";
/// Contracts source directory, relative to the project root.
pub const CONTRACTS_DIR: &str = "contracts";
/// Build output directory components, relative to the project root.
pub const BUILD_DIR: [&str; 2] = ["build", "contracts"];
/// Empty marker written into scaffolded directories.
pub const GITKEEP: &str = ".gitkeep";

pub use artifacts::{artifact_defaults, ArtifactDefaults};
pub use loader::{build_dir, load_network_config, NetworkConfig, NetworkConfigLoader};
pub use network::{ConfigValue, Network};
pub use project::{default_compilers, CompilersInfo, Config};
pub use scaffold::{initialize, BLUEPRINT};
