//! Built-in providers. Real models are supplied by the host application
//! through `IEmbeddingProvider`.

pub mod hashed_terms;

pub use hashed_terms::HashedTermEmbedder;
