//! Chain-facing pieces of network configuration.
//!
//! This crate provides:
//! - Provider specs (literal connection string or named resolver)
//! - A registry for resolvers supplied by the host application
//! - Provider URL synthesis from host, port and protocol
//! - Sender address parsing

mod address;
mod error;
mod provider;

pub use address::parse_address;
pub use error::{ProviderError, ProviderResult};
pub use provider::{
    resolve_provider, Endpoint, PortValue, ProviderResolvers, ProviderSpec,
    DEFAULT_PROTOCOL,
};

pub use alloy::primitives::Address;
