use crate::domain::repositories::AnalyticsSink;

/// Records analytics events as structured log lines.
pub struct TracingAnalyticsSink;

impl TracingAnalyticsSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingAnalyticsSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsSink for TracingAnalyticsSink {
    fn track_event(&self, category: &str, action: &str, label: &str) {
        tracing::info!(category, action, label, "Tracked search event");
    }
}
