use std::io;
use std::sync::{Arc, Mutex};

use image::{DynamicImage, ImageBuffer, Rgb};
use region_analyzer::{correct_rect, AnalyzerCore, AnalyzerOptions, Frame, Rect};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` under a TRACE-level subscriber and returns what it logged.
fn logs_of<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn white(width: u32, height: u32) -> Frame {
    Frame::new(DynamicImage::ImageRgb8(
        ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(width, height, Rgb([255, 255, 255])),
    ))
}

#[test]
fn empty_frame_logs_error() {
    let logs = logs_of(|| {
        correct_rect(Rect::new(1, 2, 3, 4), &Frame::empty());
    });
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("image is empty"), "{logs}");
}

#[test]
fn origin_past_edge_logs_error() {
    let logs = logs_of(|| {
        correct_rect(Rect::new(150, 10, 20, 20), &white(100, 100));
    });
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(logs.contains("roi is out of range"), "{logs}");
    assert!(logs.contains("[ 150, 10, 20, 20 ]"), "{logs}");
    assert!(!logs.contains("WARN"), "{logs}");
}

#[test]
fn negative_origin_logs_warning() {
    let logs = logs_of(|| {
        correct_rect(Rect::new(-5, 10, 20, 20), &white(100, 100));
    });
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("roi is out of range"), "{logs}");
    assert!(!logs.contains("ERROR"), "{logs}");
}

#[test]
fn overhang_logs_warning() {
    let logs = logs_of(|| {
        correct_rect(Rect::new(90, 90, 50, 50), &white(100, 100));
    });
    assert_eq!(logs.matches("WARN").count(), 2, "{logs}");
    assert!(!logs.contains("ERROR"), "{logs}");
}

#[test]
fn region_inside_frame_logs_nothing() {
    let logs = logs_of(|| {
        correct_rect(Rect::new(10, 10, 50, 50), &white(100, 100));
        correct_rect(Rect::default(), &white(100, 100));
    });
    assert!(logs.is_empty(), "{logs}");
}

#[test]
fn save_traces_raw_path() {
    let dir = tempfile::tempdir().unwrap();
    let options = AnalyzerOptions::default().with_debug_overlay(false);
    let core = AnalyzerCore::with_roi(white(10, 10), Rect::new(2, 2, 4, 4), &options);

    let mut saved = false;
    let logs = logs_of(|| saved = core.save_image(dir.path(), false));
    assert!(saved);
    assert!(logs.contains("TRACE"), "{logs}");
    assert!(logs.contains("Save image"), "{logs}");
    assert!(logs.contains("_0_raw.png"), "{logs}");
}

#[test]
fn failed_save_logs_error() {
    let dir = tempfile::tempdir().unwrap();
    let core = AnalyzerCore::new(Frame::empty(), &AnalyzerOptions::default());

    let mut saved = true;
    let logs = logs_of(|| saved = core.save_image(dir.path(), true));
    assert!(!saved);
    assert!(logs.contains("Failed to save image"), "{logs}");
}
