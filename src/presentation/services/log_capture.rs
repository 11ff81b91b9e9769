use anyhow::{Result, anyhow};
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CAPTURED_TARGET: &str = "anisong_finder";

pub fn init_log_capture() -> Result<Receiver<String>> {
    let (tx, rx) = channel();
    let capture_layer = CaptureLayer { sender: tx };

    tracing_subscriber::registry()
        .with(level_filter())
        .with(capture_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(rx)
}

fn level_filter() -> LevelFilter {
    if cfg!(any(debug_assertions, feature = "verbose-logging")) {
        LevelFilter::TRACE
    } else {
        LevelFilter::DEBUG
    }
}

struct CaptureLayer {
    sender: Sender<String>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();

        if !metadata.target().starts_with(CAPTURED_TARGET) {
            return;
        }

        let mut visitor = LogVisitor::default();
        event.record(&mut visitor);

        if let Some(line) = visitor.into_line(*metadata.level()) {
            let _ = self.sender.send(line);
        }
    }
}

#[derive(Default)]
struct LogVisitor {
    message: String,
    fields: Vec<String>,
}

impl LogVisitor {
    fn into_line(self, level: tracing::Level) -> Option<String> {
        if self.message.is_empty() {
            return None;
        }
        if self.fields.is_empty() {
            Some(format!("[{}] {}", level, self.message))
        } else {
            Some(format!("[{}] {} ({})", level, self.message, self.fields.join(", ")))
        }
    }
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}
