//! Tracing layer that forwards formatted log lines to a host-provided sink.

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Lines longer than this many chars are cut and suffixed with their char count.
const MAX_LINE_LEN: usize = 16_000;

/// Builds "key=value" pairs, with the message first and unquoted.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Debug) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{}={:?}", name, value).ok();
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{:?}", value).ok();
        } else {
            self.push_field(field.name(), value);
        }
    }
}

/// Layer that sends each event as "[LEVEL] target: message key=value ..." to `sink`.
///
/// With no sink the layer is a no-op, so it can always be composed.
pub fn host_log_layer(sink: Option<LogSink>) -> HostLogLayer {
    HostLogLayer { sink }
}

#[derive(Clone)]
pub struct HostLogLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for HostLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };

        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let rest = visitor.finish();

        let line = if rest.is_empty() {
            format!("[{}] {}", metadata.level(), metadata.target())
        } else {
            format!("[{}] {}: {}", metadata.level(), metadata.target(), rest)
        };
        sink(truncate(line));
    }
}

fn truncate(line: String) -> String {
    let chars = line.chars().count();
    if chars <= MAX_LINE_LEN {
        return line;
    }
    let cut: String = line.chars().take(MAX_LINE_LEN).collect();
    format!("{}... ({} chars)", cut, chars)
}
