//! Integration tests for silk-telemetry.

use silk_telemetry::bus::EventBus;
use silk_telemetry::events::{EventKind, SimulationEvent};
use silk_telemetry::sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};

// ─── EventBus Tests ───────────────────────────────────────────

#[test]
fn emit_and_flush_delivers_in_order() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let collected = sink.shared();
    bus.add_sink(Box::new(sink));

    bus.emit(SimulationEvent::new(1, EventKind::StepBegin { sim_time: 0.0, dt: 0.01 }));
    bus.emit(SimulationEvent::new(1, EventKind::StepEnd { wall_time: 0.001 }));
    assert!(collected.lock().unwrap().is_empty());

    bus.flush();
    let events = collected.lock().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].label(), "step_begin");
    assert_eq!(events[1].label(), "step_end");
    assert_eq!(bus.dispatched(), 2);
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    let reader = sink.clone();
    bus.add_sink(Box::new(sink));
    bus.set_enabled(false);

    bus.emit(SimulationEvent::new(0, EventKind::Reset));
    bus.flush();
    assert!(reader.events().is_empty());
    assert!(!bus.is_enabled());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let first = VecSink::new();
    let second = VecSink::new();
    let (r1, r2) = (first.clone(), second.clone());
    bus.add_sink(Box::new(first));
    bus.add_sink(Box::new(second));
    assert_eq!(bus.sink_count(), 2);

    bus.emit(SimulationEvent::new(3, EventKind::ImpulseToggled { active: false }));
    bus.flush();
    assert_eq!(r1.events(), r2.events());
    assert_eq!(r1.events().len(), 1);
}

#[test]
fn tracing_sink_accepts_all_levels() {
    let event = SimulationEvent::new(1, EventKind::Reset);
    for level in [tracing::Level::TRACE, tracing::Level::INFO, tracing::Level::ERROR] {
        let mut sink = TracingSink::new(level);
        sink.handle(&event);
        assert_eq!(sink.name(), "tracing_sink");
    }
}

// ─── Sink Tests ───────────────────────────────────────────────

#[test]
fn json_lines_sink_writes_one_line_per_event() {
    let mut sink = JsonLinesSink::new(Vec::new());
    sink.handle(&SimulationEvent::new(1, EventKind::Energy { kinetic: 1.0, elastic: 0.5 }));
    sink.handle(&SimulationEvent::new(
        2,
        EventKind::ParameterChanged { name: "damping".into(), value: 4.0 },
    ));
    sink.finalize();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    let second: SimulationEvent = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.step, 2);
    assert!(lines[0].contains("kinetic"));
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(5, EventKind::Energy { kinetic: 1.0, elastic: 0.5 });
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
}

#[test]
fn parameter_event_label() {
    let event = SimulationEvent::new(
        0,
        EventKind::ParameterChanged { name: "wind_z".into(), value: 8.0 },
    );
    assert_eq!(event.label(), "parameter_changed");
}
