//! Sender address parsing.

use crate::error::{ProviderError, ProviderResult};
use alloy::primitives::Address;

/// Parse a `0x`-prefixed hex account address.
pub fn parse_address(value: &str) -> ProviderResult<Address> {
    value
        .trim()
        .parse::<Address>()
        .map_err(|e| ProviderError::InvalidAddress {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
