//! Default transaction parameters applied to contract interactions.

use super::{Config, ConfigValue, Network};
use crate::error::ConfigResult;
use contractctl_chain::{parse_address, Address};
use serde::{Deserialize, Serialize};

/// Sender, gas limit and gas price defaults for one network.
///
/// Unset values stay absent, they are never defaulted to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<ConfigValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<ConfigValue>,
}

impl ArtifactDefaults {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.gas.is_none() && self.gas_price.is_none()
    }

    /// Overlay `overrides` on top of `self`, key by key.
    pub fn overlay(self, overrides: ArtifactDefaults) -> Self {
        Self {
            from: overrides.from.or(self.from),
            gas: overrides.gas.or(self.gas),
            gas_price: overrides.gas_price.or(self.gas_price),
        }
    }

    /// Default sender parsed as an account address.
    pub fn from_address(&self) -> ConfigResult<Option<Address>> {
        self.from
            .as_ref()
            .map(|from| parse_address(&from.to_string()))
            .transpose()
            .map_err(Into::into)
    }
}

/// Merge project-level defaults with the network's own, network values win.
pub fn artifact_defaults(config: &Config, network: &Network) -> ArtifactDefaults {
    config
        .artifact_defaults()
        .overlay(network.artifact_defaults())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use contractctl_chain::ProviderError;

    #[test]
    fn test_network_overrides_project() {
        let config = Config {
            gas: Some(ConfigValue::Number(100)),
            from: Some(ConfigValue::from("0xA")),
            ..Default::default()
        };
        let network = Network {
            gas: Some(ConfigValue::Number(200)),
            ..Default::default()
        };

        let defaults = artifact_defaults(&config, &network);
        assert_eq!(
            defaults,
            ArtifactDefaults {
                from: Some(ConfigValue::from("0xA")),
                gas: Some(ConfigValue::Number(200)),
                gas_price: None,
            }
        );
    }

    #[test]
    fn test_unset_keys_are_absent() {
        let config = Config {
            gas: Some(ConfigValue::Number(100)),
            from: Some(ConfigValue::from("0xA")),
            ..Default::default()
        };
        let network = Network {
            gas: Some(ConfigValue::Number(200)),
            ..Default::default()
        };

        let json = serde_json::to_value(artifact_defaults(&config, &network)).unwrap();
        assert_eq!(json, serde_json::json!({ "gas": 200, "from": "0xA" }));
    }

    #[test]
    fn test_empty_when_nothing_declared() {
        let defaults = artifact_defaults(&Config::default(), &Network::default());
        assert!(defaults.is_empty());
    }

    #[test]
    fn test_from_address() {
        let defaults = ArtifactDefaults {
            from: Some(ConfigValue::from("0x00A89d7a5A02160f20150EbEA7a2b5E4879A1A8b")),
            ..Default::default()
        };
        assert!(defaults.from_address().unwrap().is_some());

        assert_eq!(ArtifactDefaults::default().from_address().unwrap(), None);

        let short = ArtifactDefaults {
            from: Some(ConfigValue::from("0xA")),
            ..Default::default()
        };
        assert!(matches!(
            short.from_address().unwrap_err(),
            ConfigError::Provider(ProviderError::InvalidAddress { .. })
        ));
    }
}
