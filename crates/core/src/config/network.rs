//! Per-network settings from the networks file.

use super::ArtifactDefaults;
use crate::error::{ConfigError, ConfigResult};
use contractctl_chain::{resolve_provider, Endpoint, PortValue, ProviderResolvers, ProviderSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar that may be written as a number or a string.
///
/// Used for gas values, sender and network identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Number(u64),
    Text(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Number(value) => write!(f, "{}", value),
            ConfigValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Text(value.to_string())
    }
}

/// One named deployment target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<PortValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Explicit provider, takes precedence over host/port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderSpec>,
    /// Default sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ConfigValue>,
    /// Default gas limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<ConfigValue>,
    /// Default gas price
    #[serde(default, alias = "gasPrice", skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<ConfigValue>,
    /// Camel-case spelling of `network_id`, reconciled by [`Network::network_id`]
    #[serde(default, rename = "networkId", skip_serializing_if = "Option::is_none")]
    pub network_id_camel: Option<ConfigValue>,
}

impl Network {
    /// Network at `host:port` with no other settings.
    pub fn at(host: impl Into<String>, port: u64) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(PortValue::Number(port)),
            ..Default::default()
        }
    }

    pub fn endpoint(&self) -> Endpoint<'_> {
        Endpoint {
            host: self.host.as_deref(),
            port: self.port.as_ref(),
            protocol: self.protocol.as_deref(),
        }
    }

    /// Resolve the connection string for this network.
    pub fn provider(&self, resolvers: &ProviderResolvers) -> ConfigResult<String> {
        Ok(resolve_provider(
            self.provider.as_ref(),
            &self.endpoint(),
            resolvers,
        )?)
    }

    /// Network identifier, reconciling both accepted spellings.
    ///
    /// When both are present they must agree by textual value, so `1` and
    /// `"1"` are the same identifier.
    pub fn network_id(&self, name: &str) -> ConfigResult<Option<&ConfigValue>> {
        match (&self.network_id, &self.network_id_camel) {
            (Some(snake), Some(camel)) if snake.to_string() != camel.to_string() => {
                Err(ConfigError::ConflictingNetworkId {
                    network: name.to_string(),
                    snake: snake.to_string(),
                    camel: camel.to_string(),
                })
            }
            (Some(id), _) | (None, Some(id)) => Ok(Some(id)),
            (None, None) => Ok(None),
        }
    }

    /// Transaction defaults declared on this network only.
    pub fn artifact_defaults(&self) -> ArtifactDefaults {
        ArtifactDefaults {
            from: self.from.clone(),
            gas: self.gas.clone(),
            gas_price: self.gas_price.clone(),
        }
    }
}
