// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use hookline::{Context, Partial, PipelineError, Ui};
use serde_json::Value;
use std::future::{ready, Ready};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;

// --- Recording Ui double ---

/// Records everything the pipeline writes through the Ui collaborator so
/// tests can assert on notification behavior.
pub struct RecordingUi {
  verbose: bool,
  lines: Mutex<Vec<String>>,
  error_lines: Mutex<Vec<String>>,
  ticks: AtomicUsize,
  started_total: Mutex<Option<usize>>,
}

impl RecordingUi {
  fn new(verbose: bool) -> Arc<Self> {
    Arc::new(Self {
      verbose,
      lines: Mutex::new(Vec::new()),
      error_lines: Mutex::new(Vec::new()),
      ticks: AtomicUsize::new(0),
      started_total: Mutex::new(None),
    })
  }

  pub fn lines(&self) -> Vec<String> {
    self.lines.lock().unwrap().clone()
  }

  pub fn error_lines(&self) -> Vec<String> {
    self.error_lines.lock().unwrap().clone()
  }

  pub fn has_line_containing(&self, needle: &str) -> bool {
    self.lines().iter().any(|l| l.contains(needle))
  }

  pub fn has_error_line_containing(&self, needle: &str) -> bool {
    self.error_lines().iter().any(|l| l.contains(needle))
  }

  pub fn tick_count(&self) -> usize {
    self.ticks.load(Ordering::SeqCst)
  }

  pub fn started_total(&self) -> Option<usize> {
    *self.started_total.lock().unwrap()
  }
}

impl Ui for RecordingUi {
  fn verbose(&self) -> bool {
    self.verbose
  }

  fn write(&self, text: &str) {
    self.lines.lock().unwrap().push(text.to_string());
  }

  fn write_error(&self, text: &str) {
    self.error_lines.lock().unwrap().push(text.to_string());
  }

  fn progress_start(&self, total: usize) {
    *self.started_total.lock().unwrap() = Some(total);
  }

  fn progress_tick(&self) {
    self.ticks.fetch_add(1, Ordering::SeqCst);
  }
}

pub fn verbose_ui() -> Arc<RecordingUi> {
  RecordingUi::new(true)
}

pub fn quiet_ui() -> Arc<RecordingUi> {
  RecordingUi::new(false)
}

// --- Common hook-function builders ---

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
  Arc::new(Mutex::new(Vec::new()))
}

/// A hook function that records its invocation and returns no partial.
pub fn recording_fn(log: &CallLog, name: &'static str) -> impl Fn(Context) -> Ready<anyhow::Result<Option<Partial>>> {
  let log = Arc::clone(log);
  move |_ctx| {
    log.lock().unwrap().push(name.to_string());
    ready(Ok(None))
  }
}

/// A hook function returning a fixed partial to merge.
pub fn partial_fn(partial: Partial) -> impl Fn(Context) -> Ready<anyhow::Result<Option<Partial>>> {
  move |_ctx| ready(Ok(Some(partial.clone())))
}

/// A hook function failing with the given message.
pub fn failing_fn(message: &'static str) -> impl Fn(Context) -> Ready<anyhow::Result<Option<Partial>>> {
  move |_ctx| ready(Err(anyhow::anyhow!(message)))
}

/// Builds a partial from key-value pairs.
pub fn partial_of(pairs: &[(&str, Value)]) -> Partial {
  let mut map = Partial::new();
  for (key, value) in pairs {
    map.insert((*key).to_string(), value.clone());
  }
  map
}

/// Unwraps the Aborted envelope and hands back the underlying cause.
pub fn aborted_cause(error: PipelineError) -> PipelineError {
  match error {
    PipelineError::Aborted { source } => *source,
    other => panic!("Expected PipelineError::Aborted, got {:?}", other),
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
