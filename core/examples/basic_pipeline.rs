// hookline/examples/basic_pipeline.rs

use hookline::{ConsoleUi, Context, Partial, Pipeline};
use serde_json::json;
use std::future::ready;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Basic Pipeline Example ---");

  let ui = Arc::new(ConsoleUi::new(true));
  let mut pipeline = Pipeline::new(&["configure", "build", "upload", "activate"], ui);

  pipeline.register_named("configure", "defaults", |_ctx: Context| {
    let mut partial = Partial::new();
    partial.insert("bucket".to_string(), json!("assets-production"));
    ready(Ok(Some(partial)))
  });

  pipeline.register_named("build", "compile", |_ctx: Context| async move {
    // Pretend to produce build artifacts.
    let mut partial = Partial::new();
    partial.insert("artifacts".to_string(), json!(["app.js", "app.css"]));
    Ok(Some(partial))
  });

  pipeline.register_named("upload", "push assets", |ctx: Context| {
    let bucket = ctx.get("bucket");
    let artifacts = ctx.get("artifacts");
    info!(?bucket, ?artifacts, "uploading");
    ready(Ok(None))
  });

  pipeline.register_named("activate", "flip pointer", |_ctx: Context| {
    let mut partial = Partial::new();
    partial.insert("activated".to_string(), json!(true));
    ready(Ok(Some(partial)))
  });

  let final_context = pipeline.execute_default().await.expect("pipeline should complete");
  info!("Final context: {}", serde_json::to_string_pretty(&final_context).unwrap());

  assert_eq!(final_context.get("activated"), Some(&json!(true)));
}
