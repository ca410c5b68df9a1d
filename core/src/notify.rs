// hookline/src/notify.rs

//! Execution-transition reporting.
//!
//! The core raises transition events through the [`Notifier`] observer and
//! never formats terminal output itself; rendering (colors, bars) belongs to
//! the [`Ui`] collaborator behind the trait. Two mutually exclusive
//! presentations exist, selected by the Ui's verbose flag: structured
//! indented log lines, or a tick-per-function progress indicator.

use crate::core::hook::CONFIGURE_HOOK;
use crate::error::PipelineError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Narrow external collaborator the pipeline writes through. Owns no
/// pipeline state.
pub trait Ui: Send + Sync {
  /// Selects the verbose (structured log) presentation over the progress
  /// indicator.
  fn verbose(&self) -> bool;

  fn write(&self, text: &str);

  /// Error-severity output; used regardless of verbosity.
  fn write_error(&self, text: &str);

  /// Announces the total number of progress ticks expected for this run.
  fn progress_start(&self, total: usize);

  fn progress_tick(&self);
}

/// Observer for execution transitions raised by the executor and the
/// failure handler.
pub trait Notifier: Send + Sync {
  fn on_start(&self, total_functions: usize);
  fn on_hook_start(&self, hook: &str);
  fn on_function_start(&self, hook: &str, function: &str);
  fn on_complete(&self);
  fn on_failure(&self, error: &PipelineError);
  fn on_abort(&self);
}

/// Verbose presentation: one structured, indented line per transition.
pub struct VerboseNotifier {
  ui: Arc<dyn Ui>,
}

impl VerboseNotifier {
  pub fn new(ui: Arc<dyn Ui>) -> Self {
    Self { ui }
  }
}

impl Notifier for VerboseNotifier {
  fn on_start(&self, _total_functions: usize) {
    self.ui.write("Executing pipeline\n");
  }

  fn on_hook_start(&self, hook: &str) {
    self.ui.write("|\n");
    self.ui.write(&format!("+- {}\n", hook));
  }

  fn on_function_start(&self, _hook: &str, function: &str) {
    self.ui.write("|  |\n");
    self.ui.write(&format!("|  +- {}\n", function));
  }

  fn on_complete(&self) {
    self.ui.write("|\n");
    self.ui.write("Pipeline complete\n");
  }

  fn on_failure(&self, _error: &PipelineError) {
    self.ui.write_error("|\n");
    self.ui.write_error("+- didFail\n");
  }

  fn on_abort(&self) {
    self.ui.write("|\n");
    self.ui.write_error("Pipeline aborted\n");
  }
}

/// Quiet presentation: a single progress indicator ticked once per hook
/// function. Functions under the configure hook are excluded from the total
/// and never tick.
pub struct ProgressNotifier {
  ui: Arc<dyn Ui>,
}

impl ProgressNotifier {
  pub fn new(ui: Arc<dyn Ui>) -> Self {
    Self { ui }
  }
}

impl Notifier for ProgressNotifier {
  fn on_start(&self, total_functions: usize) {
    self.ui.progress_start(total_functions);
  }

  fn on_hook_start(&self, _hook: &str) {}

  fn on_function_start(&self, hook: &str, _function: &str) {
    if hook != CONFIGURE_HOOK {
      self.ui.progress_tick();
    }
  }

  fn on_complete(&self) {}

  fn on_failure(&self, _error: &PipelineError) {}

  fn on_abort(&self) {}
}

/// Reference [`Ui`] writing to stdout/stderr with a plain counter-based
/// progress rendering.
pub struct ConsoleUi {
  verbose: bool,
  // (ticked, total) for the in-flight run
  progress: Mutex<Option<(usize, usize)>>,
}

impl ConsoleUi {
  pub fn new(verbose: bool) -> Self {
    Self {
      verbose,
      progress: Mutex::new(None),
    }
  }
}

impl Ui for ConsoleUi {
  fn verbose(&self) -> bool {
    self.verbose
  }

  fn write(&self, text: &str) {
    print!("{}", text);
  }

  fn write_error(&self, text: &str) {
    eprint!("{}", text);
  }

  fn progress_start(&self, total: usize) {
    *self.progress.lock() = Some((0, total));
  }

  fn progress_tick(&self) {
    let mut progress = self.progress.lock();
    if let Some((ticked, total)) = progress.as_mut() {
      *ticked += 1;
      println!("pipeline progress [{}/{}]", ticked, total);
    }
  }
}
