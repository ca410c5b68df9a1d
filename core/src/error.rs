// hookline/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
  /// Uniform wrapper for any failure raised by a hook function, regardless
  /// of whether it failed before or after its first suspension point.
  #[error("Hook function '{function}' in hook '{hook}' failed")]
  Hook {
    hook: String,
    function: String,
    #[source]
    source: AnyhowError,
  },

  /// A partial result tried to merge a sequence with a non-sequence at the
  /// same key. Never coerced; aborts the run like any other hook failure.
  #[error("Merge conflict at key '{key}': sequence merged with non-sequence")]
  MergeConflict { key: String },

  /// Terminal signal emitted after the didFail hook has settled. Carries no
  /// payload of its own; the original cause remains on the source chain.
  #[error("Pipeline aborted")]
  Aborted {
    #[source]
    source: Box<PipelineError>,
  },

  #[error("Unknown environment '{name}'")]
  UnknownEnvironment { name: String },

  #[error("Configuration error")]
  Config {
    #[source]
    source: AnyhowError,
  },
}

impl PipelineError {
  /// Renders the error together with its full cause chain, one cause per
  /// line. Surfaced at error severity regardless of verbosity.
  pub fn render_chain(&self) -> String {
    let mut rendered = self.to_string();
    let mut source = std::error::Error::source(self);
    while let Some(cause) = source {
      rendered.push_str("\n  caused by: ");
      rendered.push_str(&cause.to_string());
      source = cause.source();
    }
    rendered
  }
}

pub type PipelineResult<T, E = PipelineError> = std::result::Result<T, E>;
