//! # persona-embeddings
//!
//! The embedding model is an opaque capability that may be missing on some
//! platforms. This crate models it as an explicit value the caller injects,
//! with graceful degradation at every step.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingCapability
//! ├── Unavailable            (keyword classification only)
//! └── Available(provider)
//!     ├── TimeoutProvider    (caller-imposed deadline per call)
//!     ├── DegradationChain   (first healthy provider wins)
//!     └── HashedTermEmbedder (offline, always available)
//! ```

pub mod capability;
pub mod degradation;
pub mod providers;
pub mod similarity;
pub mod timeout;

pub use capability::EmbeddingCapability;
pub use degradation::{DegradationChain, MAX_RETAINED_EVENTS};
pub use providers::HashedTermEmbedder;
pub use similarity::{cosine_similarity, max_similarity};
pub use timeout::TimeoutProvider;
