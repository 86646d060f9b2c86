mod config_error;
mod embedding_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;

/// Top-level error for the persona workspace.
///
/// `analyze` itself never fails; these surface from configuration loading,
/// embedding providers, and result serialization.
#[derive(Debug, thiserror::Error)]
pub enum PersonaError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type PersonaResult<T> = Result<T, PersonaError>;
