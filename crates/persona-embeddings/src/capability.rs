//! Capability detection with an explicit "unavailable" variant.

use std::fmt;
use std::sync::Arc;

use persona_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Whether an embedding model can be consulted for this analysis.
#[derive(Clone, Default)]
pub enum EmbeddingCapability {
    Available(Arc<dyn IEmbeddingProvider>),
    #[default]
    Unavailable,
}

impl EmbeddingCapability {
    pub fn available<P: IEmbeddingProvider + 'static>(provider: P) -> Self {
        Self::Available(Arc::new(provider))
    }

    /// True when a provider is present and reports itself healthy.
    pub fn is_available(&self) -> bool {
        match self {
            Self::Available(p) => p.is_available(),
            Self::Unavailable => false,
        }
    }

    pub fn provider_name(&self) -> &str {
        match self {
            Self::Available(p) => p.name(),
            Self::Unavailable => "unavailable",
        }
    }

    /// Embed `text`, collapsing every failure mode into `None`.
    pub fn embed(&self, text: &str) -> Option<Vec<f32>> {
        let Self::Available(provider) = self else {
            return None;
        };
        if !provider.is_available() {
            return None;
        }
        match provider.embed(text) {
            Ok(v) if !v.is_empty() => Some(v),
            Ok(_) => None,
            Err(e) => {
                debug!(provider = provider.name(), error = %e, "embedding failed");
                None
            }
        }
    }

    /// Embed a batch. Each slot is `None` if that text could not be embedded.
    pub fn embed_batch(&self, texts: &[String]) -> Vec<Option<Vec<f32>>> {
        let Self::Available(provider) = self else {
            return vec![None; texts.len()];
        };
        if !provider.is_available() {
            return vec![None; texts.len()];
        }
        match provider.embed_batch(texts) {
            Ok(vecs) if vecs.len() == texts.len() => vecs
                .into_iter()
                .map(|v| if v.is_empty() { None } else { Some(v) })
                .collect(),
            Ok(vecs) => {
                debug!(
                    provider = provider.name(),
                    expected = texts.len(),
                    actual = vecs.len(),
                    "batch size mismatch, embedding individually"
                );
                texts.iter().map(|t| self.embed(t)).collect()
            }
            Err(e) => {
                debug!(provider = provider.name(), error = %e, "batch embedding failed");
                texts.iter().map(|t| self.embed(t)).collect()
            }
        }
    }
}

impl fmt::Debug for EmbeddingCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(p) => f.debug_tuple("Available").field(&p.name()).finish(),
            Self::Unavailable => f.write_str("Unavailable"),
        }
    }
}

impl From<Arc<dyn IEmbeddingProvider>> for EmbeddingCapability {
    fn from(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        Self::Available(provider)
    }
}

impl From<Option<Arc<dyn IEmbeddingProvider>>> for EmbeddingCapability {
    fn from(provider: Option<Arc<dyn IEmbeddingProvider>>) -> Self {
        provider.map_or(Self::Unavailable, Self::Available)
    }
}
