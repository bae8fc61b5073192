use thiserror::Error;

/// Errors raised while turning a network entry into a connection string.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("A host name must be specified")]
    MissingHost,

    #[error("A port must be specified")]
    MissingPort,

    #[error("Provider resolver '{0}' is not registered")]
    UnknownResolver(String),

    #[error("Provider resolver '{name}' failed: {source}")]
    ResolverFailed {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid address '{value}': {reason}")]
    InvalidAddress { value: String, reason: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;
