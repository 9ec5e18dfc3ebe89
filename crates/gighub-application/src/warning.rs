//! Warning surface collaborator.

/// Receives the findings of a blocked submit for display.
///
/// Implementations get the exact lists produced by classification, in
/// order. The user acknowledges the warning and edits the draft, which the
/// session keeps intact.
pub trait WarningSurface: Send + Sync {
    fn show_warning(&self, reasons: &[String], detected_patterns: &[String]);
}

/// Discards warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWarningSurface;

impl WarningSurface for NoopWarningSurface {
    fn show_warning(&self, _reasons: &[String], _detected_patterns: &[String]) {}
}

/// Reports warnings through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarningSurface;

impl WarningSurface for TracingWarningSurface {
    fn show_warning(&self, reasons: &[String], detected_patterns: &[String]) {
        tracing::warn!(
            reasons = ?reasons,
            patterns = ?detected_patterns,
            "[Warning] Message blocked"
        );
    }
}
