//! Cosine similarity that never fails.

/// Cosine similarity of two vectors.
///
/// Mismatched dimensions, empty input, zero-norm vectors, and non-finite
/// results all yield `0.0` ("no similarity").
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom <= f64::EPSILON {
        return 0.0;
    }
    let sim = dot / denom;
    if sim.is_finite() {
        sim.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Highest similarity between `query` and any candidate; `0.0` when there
/// are no candidates.
pub fn max_similarity<'a, I>(query: &[f32], candidates: I) -> f64
where
    I: IntoIterator<Item = &'a [f32]>,
{
    candidates
        .into_iter()
        .map(|c| cosine_similarity(query, c))
        .fold(0.0, f64::max)
}
