//! Diagnostic logging setup.
//!
//! Command output goes to the writers passed into [`crate::run`]; tracing
//! events (snapshot load/save diagnostics) go to stderr and are filtered by
//! `RUST_LOG`, defaulting to warnings only.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber. Calling it more than once is a no-op.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
pub(crate) mod capture {
    use std::sync::{Arc, Mutex};
    use tracing::Level;
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::Registry;

    /// A logged event as seen by [`capture`].
    #[derive(Debug, Clone)]
    pub struct CapturedEvent {
        pub level: Level,
        pub message: String,
        pub fields: Vec<(String, String)>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = FieldVisitor::default();
            event.record(&mut visitor);
            self.events.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                fields: visitor.fields,
            });
        }
    }

    #[derive(Default)]
    struct FieldVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl tracing::field::Visit for FieldVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            let value = format!("{:?}", value);
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.push((field.name().to_string(), value));
            }
        }
    }

    /// Run `f` with a thread-local subscriber and return what it logged.
    pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
        let layer = CaptureLayer::default();
        let events = Arc::clone(&layer.events);
        let subscriber = Registry::default().with(layer);
        let out = tracing::subscriber::with_default(subscriber, f);
        let events = events.lock().unwrap().clone();
        (out, events)
    }

    #[test]
    fn captures_level_message_and_fields() {
        let ((), events) = capture(|| {
            tracing::warn!(path = "a.json", "disk full");
            tracing::debug!("loaded");
        });
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, Level::WARN);
        assert!(events[0].message.contains("disk full"));
        assert!(
            events[0]
                .fields
                .iter()
                .any(|(k, v)| k == "path" && v.contains("a.json"))
        );
        assert_eq!(events[1].level, Level::DEBUG);
    }
}
