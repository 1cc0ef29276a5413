//! Tests for tracing events emitted by the risk-score API.
#![cfg(feature = "tracing")]

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use smoking_risk::calculate_risk_score;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug)]
struct Captured {
    level: Level,
    fields: HashMap<String, String>,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(Captured {
            level: *event.metadata().level(),
            fields,
        });
    }
}

fn capture<F: FnOnce()>(f: F) -> Vec<Captured> {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, f);
    std::mem::take(&mut *layer.events.lock().unwrap())
}

#[test]
fn test_score_emits_trace_event() {
    let events = capture(|| {
        calculate_risk_score(45, 20.5, 16).unwrap();
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::TRACE);
    assert_eq!(event.fields["message"], "computed risk score");
    assert_eq!(event.fields["age"], "45");
    assert_eq!(event.fields["pack_years"], "20.5");
    assert_eq!(event.fields["age_first_cigarette"], "16");
    let score: f64 = event.fields["score"].parse().unwrap();
    assert!((score - 18.75).abs() < 1e-9);
}

#[test]
fn test_rejection_emits_debug_event() {
    let events = capture(|| {
        calculate_risk_score(45, -1.0, 16).unwrap_err();
    });

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.fields["message"], "rejected risk score input");
    assert_eq!(event.fields["error"], "Pack-years cannot be negative");
}
