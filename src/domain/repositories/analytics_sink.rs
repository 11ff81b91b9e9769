/// Fire-and-forget usage tracking.
pub trait AnalyticsSink: Send + Sync {
    fn track_event(&self, category: &str, action: &str, label: &str);
}
