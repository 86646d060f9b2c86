//! Fallback chain across embedding providers.
//!
//! Providers are tried in priority order; every fallback past the first
//! provider is recorded as a `DegradationEvent` and logged. A batch falls
//! back as a unit and records one event. Only the most recent
//! [`MAX_RETAINED_EVENTS`] events are kept.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use persona_core::errors::{EmbeddingError, PersonaResult};
use persona_core::models::DegradationEvent;
use persona_core::traits::IEmbeddingProvider;
use persona_observability::events;
use tracing::warn;

/// Upper bound on retained degradation events; older events are dropped first.
pub const MAX_RETAINED_EVENTS: usize = 64;

/// Ordered list of providers with degradation tracking.
///
/// Implements `IEmbeddingProvider` itself, so a chain can be wrapped in an
/// [`EmbeddingCapability`](crate::EmbeddingCapability) like any provider.
pub struct DegradationChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<VecDeque<DegradationEvent>>,
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationChain {
    pub fn new() -> Self {
        Self {
            chain: Vec::new(),
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(mut self, provider: impl IEmbeddingProvider + 'static) -> Self {
        self.chain.push(Box::new(provider));
        self
    }

    /// Embed with the first provider that is available and succeeds.
    /// Returns the vector and the name of the provider that produced it.
    pub fn embed_with_source(&self, text: &str) -> PersonaResult<(Vec<f32>, &str)> {
        self.first_success("embed", |p| {
            let vector = p.embed(text)?;
            check_dimensions(p, &vector)?;
            Ok(vector)
        })
    }

    /// Embed a whole batch with the first provider that succeeds on all of it.
    pub fn embed_batch_with_source(
        &self,
        texts: &[String],
    ) -> PersonaResult<(Vec<Vec<f32>>, &str)> {
        self.first_success("batch embed", |p| {
            let vectors = p.embed_batch(texts)?;
            for vector in &vectors {
                check_dimensions(p, vector)?;
            }
            Ok(vectors)
        })
    }

    fn first_success<T>(
        &self,
        operation: &str,
        call: impl Fn(&dyn IEmbeddingProvider) -> PersonaResult<T>,
    ) -> PersonaResult<(T, &str)> {
        let mut last_error = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match call(provider.as_ref()) {
                Ok(value) => {
                    if i > 0 {
                        self.record_fallback(provider.name());
                    }
                    return Ok((value, provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "{operation} failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: "all providers exhausted".to_string(),
            }
            .into()
        }))
    }

    fn record_fallback(&self, fallback: &str) {
        let primary = self.chain.first().map(|p| p.name()).unwrap_or("unknown");
        let failure = format!("{primary} unavailable");
        events::degradation_triggered("embeddings", &failure, fallback);
        if let Ok(mut log) = self.events.lock() {
            if log.len() == MAX_RETAINED_EVENTS {
                log.pop_front();
            }
            log.push_back(DegradationEvent {
                component: "embeddings".to_string(),
                failure,
                fallback_used: fallback.to_string(),
                timestamp: Utc::now(),
            });
        }
    }

    /// Number of retained events not yet drained.
    pub fn event_count(&self) -> usize {
        self.events.lock().map(|log| log.len()).unwrap_or(0)
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut log| log.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

/// A provider whose output disagrees with its declared width counts as failed.
fn check_dimensions(provider: &dyn IEmbeddingProvider, vector: &[f32]) -> PersonaResult<()> {
    let expected = provider.dimensions();
    if vector.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: vector.len(),
        }
        .into());
    }
    Ok(())
}

impl IEmbeddingProvider for DegradationChain {
    fn embed(&self, text: &str) -> PersonaResult<Vec<f32>> {
        self.embed_with_source(text).map(|(v, _)| v)
    }

    fn embed_batch(&self, texts: &[String]) -> PersonaResult<Vec<Vec<f32>>> {
        self.embed_batch_with_source(texts).map(|(v, _)| v)
    }

    fn dimensions(&self) -> usize {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.dimensions())
            .unwrap_or(0)
    }

    fn name(&self) -> &str {
        "degradation-chain"
    }

    fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }
}
