//! Caller-imposed deadline for embedding calls.
//!
//! An embedding call runs on a helper thread; if it has not answered within
//! the deadline the call returns `EmbeddingError::Timeout` and the result,
//! if it ever arrives, is discarded.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use persona_core::config::EmbeddingConfig;
use persona_core::errors::{EmbeddingError, PersonaResult};
use persona_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Wraps a provider so that slow calls count as failures.
pub struct TimeoutProvider {
    inner: Arc<dyn IEmbeddingProvider>,
    timeout: Duration,
}

impl TimeoutProvider {
    pub fn new(inner: Arc<dyn IEmbeddingProvider>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn from_config(inner: Arc<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        Self::new(inner, Duration::from_millis(config.timeout_ms))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn run<T, F>(&self, job: F) -> PersonaResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn IEmbeddingProvider) -> PersonaResult<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(1);
        let provider = Arc::clone(&self.inner);
        thread::spawn(move || {
            // The receiver may be gone after a timeout.
            let _ = tx.send(job(provider.as_ref()));
        });

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!(
                    provider = self.inner.name(),
                    timeout_ms, "embedding call exceeded deadline"
                );
                Err(EmbeddingError::Timeout { timeout_ms }.into())
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EmbeddingError::InferenceFailed {
                reason: format!("{} worker exited without a result", self.inner.name()),
            }
            .into()),
        }
    }
}

impl IEmbeddingProvider for TimeoutProvider {
    fn embed(&self, text: &str) -> PersonaResult<Vec<f32>> {
        let text = text.to_string();
        self.run(move |p| p.embed(&text))
    }

    fn embed_batch(&self, texts: &[String]) -> PersonaResult<Vec<Vec<f32>>> {
        let texts = texts.to_vec();
        self.run(move |p| p.embed_batch(&texts))
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
