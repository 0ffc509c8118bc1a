//! Verifies that the verbosity level decides which events are formatted.

use std::io;
use std::sync::{Arc, Mutex};

use logging::{VerbosityConfig, subscriber};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("capture lock").clone()).expect("utf-8 events")
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn emit_all_levels(level: u8) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = subscriber(VerbosityConfig::from_verbose_level(level), move || {
        writer.clone()
    });

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!("error-event");
        tracing::warn!("warn-event");
        tracing::info!("info-event");
        tracing::debug!("debug-event");
        tracing::trace!("trace-event");
    });
    capture.contents()
}

#[test]
fn level_zero_shows_only_warnings_and_errors() {
    let output = emit_all_levels(0);
    assert!(output.contains("error-event"));
    assert!(output.contains("warn-event"));
    assert!(!output.contains("info-event"));
    assert!(!output.contains("debug-event"));
}

#[test]
fn level_one_adds_info() {
    let output = emit_all_levels(1);
    assert!(output.contains("info-event"));
    assert!(!output.contains("debug-event"));
}

#[test]
fn level_two_adds_debug() {
    let output = emit_all_levels(2);
    assert!(output.contains("debug-event"));
    assert!(!output.contains("trace-event"));
}

#[test]
fn level_three_shows_everything() {
    let output = emit_all_levels(3);
    assert!(output.contains("trace-event"));
}

#[test]
fn formatted_events_carry_no_ansi_escapes() {
    let output = emit_all_levels(0);
    assert!(!output.contains('\u{1b}'));
}
