//! Forward `tracing` events from `portfolio-core` to the browser console
//!
//! The core crate logs with `tracing` macros. Without a subscriber those
//! events are dropped, so `init` installs [`ConsoleLayer`] on a registry.

use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Writes one formatted line per event
pub type LineSink = fn(&Level, &str);

fn console_sink(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}

/// `tracing` layer that prints events as `LEVEL target: message key=value`
pub struct ConsoleLayer {
    max_level: Level,
    sink: LineSink,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self::with_sink(max_level, console_sink)
    }

    pub fn with_sink(max_level: Level, sink: LineSink) -> Self {
        Self { max_level, sink }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // TRACE compares greatest
        if *metadata.level() > self.max_level {
            return;
        }
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = format!(
            "{} {}: {}",
            metadata.level(),
            metadata.target(),
            visitor.finish()
        );
        (self.sink)(metadata.level(), &line);
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{}{}", self.message, self.fields)
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Install the console layer as the global subscriber.
///
/// Returns `false` if a subscriber was already installed.
pub fn install() -> bool {
    tracing_subscriber::registry()
        .with(ConsoleLayer::default())
        .try_init()
        .is_ok()
}
