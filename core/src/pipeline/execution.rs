// hookline/src/pipeline/execution.rs

//! Contains `Pipeline::execute()`: the sequential executor and the two-stage
//! failure-recovery protocol wrapped around it.
//!
//! State machine: RUNNING -> COMPLETED on success, or
//! RUNNING -> FAILING (didFail runs once) -> ABORTED on any failure.

use crate::core::context::Context;
use crate::core::hook::DID_FAIL_HOOK;
use crate::core::merge::merge_into;
use crate::error::{PipelineError, PipelineResult};
use crate::notify::{Notifier, ProgressNotifier, VerboseNotifier};
use crate::pipeline::definition::Pipeline;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{event, instrument, Level};

impl Pipeline {
  /// Executes all hooks in declaration order against a context seeded from
  /// `seed`, returning the final merged mapping.
  ///
  /// Hook functions run strictly sequentially; each function's partial
  /// result is merged before the next function is invoked, so every function
  /// observes all prior mutations within the run. At most one `execute()`
  /// may be in flight per pipeline instance.
  ///
  /// On failure the `didFail` hook runs exactly once against the context as
  /// of the failure point, then the run settles as
  /// [`PipelineError::Aborted`] with the original cause on its source chain.
  #[instrument(
        name = "Pipeline::execute",
        skip_all,
        fields(num_hooks = self.hook_names.len()),
        err(Display)
    )]
  pub async fn execute(&self, seed: Map<String, Value>) -> PipelineResult<Map<String, Value>> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    let context = Context::new(seed);
    let notifier: Box<dyn Notifier> = if self.ui.verbose() {
      Box::new(VerboseNotifier::new(Arc::clone(&self.ui)))
    } else {
      Box::new(ProgressNotifier::new(Arc::clone(&self.ui)))
    };
    notifier.on_start(self.progress_total());

    match self.run_to_completion(&context, notifier.as_ref()).await {
      Ok(()) => {
        notifier.on_complete();
        event!(Level::DEBUG, "Pipeline execution completed successfully.");
        Ok(context.snapshot())
      }
      Err(error) => {
        let cause = self.recover(&context, notifier.as_ref(), error).await;
        notifier.on_abort();
        Err(PipelineError::Aborted {
          source: Box::new(cause),
        })
      }
    }
  }

  /// Convenience wrapper seeding an empty context.
  pub async fn execute_default(&self) -> PipelineResult<Map<String, Value>> {
    self.execute(Map::new()).await
  }

  async fn run_to_completion(&self, context: &Context, notifier: &dyn Notifier) -> PipelineResult<()> {
    for hook_name in self.hook_names.iter().filter(|n| n.as_str() != DID_FAIL_HOOK) {
      event!(Level::DEBUG, hook = %hook_name, "Processing hook.");
      notifier.on_hook_start(hook_name);
      self.run_hook(hook_name, context, notifier).await?;
    }
    Ok(())
  }

  /// Runs one hook's function chain in registration order, merging each
  /// returned partial into the context. A hook with no functions is a
  /// pass-through.
  async fn run_hook(&self, hook_name: &str, context: &Context, notifier: &dyn Notifier) -> PipelineResult<()> {
    for entry in self.functions_for(hook_name) {
      notifier.on_function_start(hook_name, &entry.display_name);
      event!(
        Level::TRACE,
        hook = hook_name,
        function = %entry.display_name,
        "Invoking hook function."
      );

      let partial = entry
        .callable
        .invoke(context.clone())
        .await
        .map_err(|source| PipelineError::Hook {
          hook: hook_name.to_string(),
          function: entry.display_name.clone(),
          source,
        })?;

      if let Some(partial) = partial {
        merge_into(&mut *context.write(), partial)?;
      }
    }
    Ok(())
  }

  /// FAILING stage: surface the error at error severity (regardless of
  /// verbosity), run the didFail chain against the context as of the failure
  /// point, and hand back the cause to re-raise. A failure inside didFail
  /// supersedes the original cause.
  async fn recover(&self, context: &Context, notifier: &dyn Notifier, error: PipelineError) -> PipelineError {
    event!(Level::ERROR, error = %error, "Pipeline failure, running didFail recovery.");
    notifier.on_failure(&error);
    self.ui.write_error(&format!("{}\n", error.render_chain()));

    match self.run_hook(DID_FAIL_HOOK, context, notifier).await {
      Ok(()) => error,
      Err(recovery_error) => {
        event!(Level::ERROR, error = %recovery_error, "didFail hook itself failed.");
        recovery_error
      }
    }
  }
}
