//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed analysis.
pub fn analysis_completed(dominant: &str, confidence: &str, evidence_entries: usize) {
    tracing::info!(
        event = "analysis_completed",
        dominant = %dominant,
        confidence = %confidence,
        evidence_entries = evidence_entries,
        "personality analysis completed"
    );
}

/// Log the semantic classifier falling back to keywords. `text` is the
/// combined category and habit text that failed to classify.
pub fn classifier_fallback(text: &str, reason: &str) {
    tracing::debug!(
        event = "classifier_fallback",
        text = %text,
        reason = %reason,
        "semantic classification unavailable, using keywords"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log an exact score tie resolved by the composite tie-break.
pub fn tie_break_resolved(tied: &[String], winner: &str, composite: f64) {
    tracing::debug!(
        event = "tie_break_resolved",
        tied = ?tied,
        winner = %winner,
        composite = composite,
        "dominant trait tie resolved"
    );
}
