//! Project-wide configuration read from `networks.toml`.

use super::{ArtifactDefaults, ConfigValue, Network};
use crate::error::{ConfigError, ConfigResult};
use contractctl_chain::ProviderSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// Compiler settings, passed through untouched.
pub type CompilersInfo = Table;

/// Contents of the networks file plus the computed build directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Deployment targets by name
    #[serde(default)]
    pub networks: BTreeMap<String, Network>,
    /// Project-wide provider, not used for network resolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<ConfigValue>,
    #[serde(default, alias = "gasPrice", skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<ConfigValue>,
    #[serde(default = "default_compilers")]
    pub compilers: CompilersInfo,
    /// Always `{root}/build/contracts`, never read from the file
    #[serde(skip_deserializing)]
    pub build_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            networks: BTreeMap::new(),
            provider: None,
            from: None,
            gas: None,
            gas_price: None,
            compilers: default_compilers(),
            build_dir: PathBuf::new(),
        }
    }
}

impl Config {
    /// Parse a networks file. `build_dir` is left empty.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up a network by name.
    pub fn network(&self, name: &str) -> ConfigResult<&Network> {
        self.networks
            .get(name)
            .ok_or_else(|| ConfigError::MissingNetwork(name.to_string()))
    }

    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }

    /// Project-level transaction defaults.
    pub fn artifact_defaults(&self) -> ArtifactDefaults {
        ArtifactDefaults {
            from: self.from.clone(),
            gas: self.gas.clone(),
            gas_price: self.gas_price.clone(),
        }
    }
}

/// Compiler settings used when the networks file declares none.
///
/// ```toml
/// [compilers.vyper]
///
/// [compilers.solc.settings.optimizer]
/// enabled = false
/// runs = 200
/// ```
pub fn default_compilers() -> CompilersInfo {
    let mut optimizer = Table::new();
    optimizer.insert("enabled".to_string(), Value::Boolean(false));
    optimizer.insert("runs".to_string(), Value::Integer(200));

    let mut settings = Table::new();
    settings.insert("optimizer".to_string(), Value::Table(optimizer));

    let mut solc = Table::new();
    solc.insert("settings".to_string(), Value::Table(settings));

    let mut compilers = Table::new();
    compilers.insert("vyper".to_string(), Value::Table(Table::new()));
    compilers.insert("solc".to_string(), Value::Table(solc));
    compilers
}
