use contractctl_chain::ProviderError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Given network '{0}' is not defined in your networks.toml file")]
    MissingNetwork(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Network '{network}' declares conflicting identifiers: network_id = {snake}, networkId = {camel}")]
    ConflictingNetworkId {
        network: String,
        snake: String,
        camel: String,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Scaffold {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Current directory is unavailable: {0}")]
    CurrentDir(#[source] io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
