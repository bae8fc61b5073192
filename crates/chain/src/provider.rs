//! Provider resolution for network entries.
//!
//! A network either names its provider explicitly, as a literal connection
//! string or as a resolver registered by the host application, or leaves it
//! to be synthesized from host, port and protocol.

use crate::error::{ProviderError, ProviderResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Protocol used when a network does not declare one.
pub const DEFAULT_PROTOCOL: &str = "http";

/// Explicit provider declared in the networks file.
///
/// ```toml
/// provider = "https://sepolia.example.org/v3/abc123"
/// provider = { resolver = "infura" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProviderSpec {
    /// Literal connection string, used as written
    Url(String),
    /// Name of a resolver registered in [`ProviderResolvers`]
    Resolver { resolver: String },
}

impl ProviderSpec {
    /// A literal empty string counts as "no provider".
    fn is_blank(&self) -> bool {
        matches!(self, ProviderSpec::Url(url) if url.is_empty())
    }
}

/// Port as written in the networks file (`8545` or `"8545"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PortValue {
    Number(u64),
    Text(String),
}

impl PortValue {
    fn is_unset(&self) -> bool {
        match self {
            PortValue::Number(port) => *port == 0,
            PortValue::Text(port) => port.is_empty(),
        }
    }
}

impl fmt::Display for PortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortValue::Number(port) => write!(f, "{}", port),
            PortValue::Text(port) => f.write_str(port),
        }
    }
}

/// Connection fields used to synthesize a provider URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Endpoint<'a> {
    pub host: Option<&'a str>,
    pub port: Option<&'a PortValue>,
    pub protocol: Option<&'a str>,
}

impl Endpoint<'_> {
    /// Build `{protocol}://{host}:{port}`, defaulting the protocol to http.
    ///
    /// The host is checked before the port.
    pub fn url(&self) -> ProviderResult<String> {
        let host = self
            .host
            .filter(|host| !host.is_empty())
            .ok_or(ProviderError::MissingHost)?;
        let port = self
            .port
            .filter(|port| !port.is_unset())
            .ok_or(ProviderError::MissingPort)?;
        let protocol = self
            .protocol
            .filter(|protocol| !protocol.is_empty())
            .unwrap_or(DEFAULT_PROTOCOL);

        Ok(format!("{}://{}:{}", protocol, host, port))
    }
}

type ResolverFn = Box<dyn Fn() -> anyhow::Result<String>>;

/// Named provider resolvers registered by the host application.
#[derive(Default)]
pub struct ProviderResolvers {
    resolvers: HashMap<String, ResolverFn>,
}

impl ProviderResolvers {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolver, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, resolver: F) -> &mut Self
    where
        F: Fn() -> anyhow::Result<String> + 'static,
    {
        self.resolvers.insert(name.into(), Box::new(resolver));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    /// Registered resolver names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.resolvers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Invoke the resolver registered under `name`.
    pub fn resolve(&self, name: &str) -> ProviderResult<String> {
        let resolver = self
            .resolvers
            .get(name)
            .ok_or_else(|| ProviderError::UnknownResolver(name.to_string()))?;

        debug!(resolver = name, "Invoking provider resolver");
        resolver().map_err(|e| ProviderError::ResolverFailed {
            name: name.to_string(),
            source: e.into(),
        })
    }
}

impl fmt::Debug for ProviderResolvers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderResolvers")
            .field("resolvers", &self.names())
            .finish()
    }
}

/// Resolve the provider for one network.
///
/// An explicit provider always wins over synthesis from the endpoint.
pub fn resolve_provider(
    explicit: Option<&ProviderSpec>,
    endpoint: &Endpoint<'_>,
    resolvers: &ProviderResolvers,
) -> ProviderResult<String> {
    match explicit.filter(|spec| !spec.is_blank()) {
        Some(ProviderSpec::Url(url)) => Ok(url.clone()),
        Some(ProviderSpec::Resolver { resolver }) => resolvers.resolve(resolver),
        None => endpoint.url(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn endpoint<'a>(host: Option<&'a str>, port: Option<&'a PortValue>) -> Endpoint<'a> {
        Endpoint {
            host,
            port,
            protocol: None,
        }
    }

    #[test]
    fn test_literal_provider_wins() {
        let port = PortValue::Number(8545);
        let spec = ProviderSpec::Url("https://node.example.org".to_string());
        let provider = resolve_provider(
            Some(&spec),
            &endpoint(Some("localhost"), Some(&port)),
            &ProviderResolvers::new(),
        )
        .unwrap();
        assert_eq!(provider, "https://node.example.org");
    }

    #[test]
    fn test_literal_provider_without_endpoint() {
        let spec = ProviderSpec::Url("ws://10.0.0.1:8546".to_string());
        let provider =
            resolve_provider(Some(&spec), &Endpoint::default(), &ProviderResolvers::new())
                .unwrap();
        assert_eq!(provider, "ws://10.0.0.1:8546");
    }

    #[test]
    fn test_resolver_invoked_once() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let mut resolvers = ProviderResolvers::new();
        resolvers.register("counting", move || {
            counter.set(counter.get() + 1);
            Ok("https://resolved.example.org".to_string())
        });

        let spec = ProviderSpec::Resolver {
            resolver: "counting".to_string(),
        };
        let provider = resolve_provider(Some(&spec), &Endpoint::default(), &resolvers).unwrap();

        assert_eq!(provider, "https://resolved.example.org");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_unknown_resolver() {
        let spec = ProviderSpec::Resolver {
            resolver: "missing".to_string(),
        };
        let err = resolve_provider(Some(&spec), &Endpoint::default(), &ProviderResolvers::new())
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownResolver(ref name) if name == "missing"));
    }

    #[test]
    fn test_resolver_failure_propagates() {
        let mut resolvers = ProviderResolvers::new();
        resolvers.register("broken", || Err(anyhow::anyhow!("no credentials")));
        let err = resolvers.resolve("broken").unwrap_err();
        assert!(err.to_string().contains("no credentials"));
    }

    #[test]
    fn test_synthesized_http_url() {
        let port = PortValue::Number(8545);
        let provider = resolve_provider(
            None,
            &endpoint(Some("localhost"), Some(&port)),
            &ProviderResolvers::new(),
        )
        .unwrap();
        assert_eq!(provider, "http://localhost:8545");
    }

    #[test]
    fn test_synthesized_ws_url() {
        let port = PortValue::Text("8546".to_string());
        let endpoint = Endpoint {
            host: Some("127.0.0.1"),
            port: Some(&port),
            protocol: Some("ws"),
        };
        let provider = resolve_provider(None, &endpoint, &ProviderResolvers::new()).unwrap();
        assert_eq!(provider, "ws://127.0.0.1:8546");
    }

    #[test]
    fn test_missing_host() {
        let port = PortValue::Number(8545);
        let err = endpoint(None, Some(&port)).url().unwrap_err();
        assert!(matches!(err, ProviderError::MissingHost));

        let err = endpoint(Some(""), Some(&port)).url().unwrap_err();
        assert!(matches!(err, ProviderError::MissingHost));
    }

    #[test]
    fn test_missing_port() {
        let err = endpoint(Some("localhost"), None).url().unwrap_err();
        assert!(matches!(err, ProviderError::MissingPort));

        let zero = PortValue::Number(0);
        let err = endpoint(Some("localhost"), Some(&zero)).url().unwrap_err();
        assert!(matches!(err, ProviderError::MissingPort));
    }

    #[test]
    fn test_blank_literal_falls_back_to_endpoint() {
        let port = PortValue::Number(7545);
        let spec = ProviderSpec::Url(String::new());
        let provider = resolve_provider(
            Some(&spec),
            &endpoint(Some("localhost"), Some(&port)),
            &ProviderResolvers::new(),
        )
        .unwrap();
        assert_eq!(provider, "http://localhost:7545");
    }

    #[test]
    fn test_literal_provider_returned_verbatim() {
        // Unique var name, tests run in parallel
        std::env::set_var("PROVIDER_TEST_API_KEY", "secret");
        let spec = ProviderSpec::Url("https://node.example.org/${PROVIDER_TEST_API_KEY}".to_string());
        let provider =
            resolve_provider(Some(&spec), &Endpoint::default(), &ProviderResolvers::new())
                .unwrap();
        assert_eq!(provider, "https://node.example.org/${PROVIDER_TEST_API_KEY}");
        std::env::remove_var("PROVIDER_TEST_API_KEY");
    }

    #[test]
    fn test_whitespace_host_is_kept() {
        let port = PortValue::Number(8545);
        assert_eq!(endpoint(Some(" "), Some(&port)).url().unwrap(), "http:// :8545");

        let empty = PortValue::Text(String::new());
        let err = endpoint(Some("localhost"), Some(&empty)).url().unwrap_err();
        assert!(matches!(err, ProviderError::MissingPort));
    }

    #[test]
    fn test_provider_spec_from_toml() {
        #[derive(Deserialize)]
        struct Entry {
            provider: ProviderSpec,
        }

        let literal: Entry = toml::from_str(r#"provider = "http://localhost:8545""#).unwrap();
        assert_eq!(
            literal.provider,
            ProviderSpec::Url("http://localhost:8545".to_string())
        );

        let named: Entry = toml::from_str(r#"provider = { resolver = "infura" }"#).unwrap();
        assert_eq!(
            named.provider,
            ProviderSpec::Resolver {
                resolver: "infura".to_string()
            }
        );
    }

    #[test]
    fn test_registry_names() {
        let mut resolvers = ProviderResolvers::new();
        resolvers
            .register("b", || Ok("b".to_string()))
            .register("a", || Ok("a".to_string()));
        assert_eq!(resolvers.names(), vec!["a", "b"]);
        assert!(resolvers.contains("a"));
        assert!(!resolvers.contains("c"));
    }
}
