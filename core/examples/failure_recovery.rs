// hookline/examples/failure_recovery.rs

use hookline::{ConsoleUi, Context, Partial, Pipeline, PipelineError, DID_FAIL_HOOK};
use serde_json::json;
use std::future::ready;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Failure Recovery Example ---");

  let ui = Arc::new(ConsoleUi::new(true));
  let mut pipeline = Pipeline::new(&["configure", "build", "deploy"], ui);

  pipeline.register_named("build", "package", |_ctx: Context| {
    let mut partial = Partial::new();
    partial.insert("artifacts".to_string(), json!([1]));
    ready(Ok(Some(partial)))
  });

  pipeline.register_named("deploy", "push", |_ctx: Context| async move {
    Err(anyhow::anyhow!("net down"))
  });

  pipeline.register_named(DID_FAIL_HOOK, "cleanup", |ctx: Context| {
    info!("cleaning up, context at failure: {:?}", ctx.snapshot());
    let mut partial = Partial::new();
    partial.insert("cleanup".to_string(), json!(true));
    ready(Ok(Some(partial)))
  });

  match pipeline.execute_default().await {
    Ok(final_context) => {
      error!("Pipeline unexpectedly succeeded: {:?}", final_context);
    }
    Err(e) => {
      info!("Pipeline failed as expected:\n{}", e.render_chain());
      assert!(matches!(e, PipelineError::Aborted { .. }));
      assert!(e.render_chain().contains("net down"));
    }
  }
}
