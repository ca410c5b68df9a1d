// hookline/examples/env_config.rs

use hookline::{ConsoleUi, Context, EnvironmentConfig, Partial, Pipeline};
use serde_json::json;
use std::future::ready;
use std::sync::Arc;
use tracing::info;

const DEPLOY_CONFIG: &str = r#"
{
  "development": {
    "build": { "environment": "development" },
    "store": { "host": "localhost", "port": 6379 }
  },
  "production": {
    "build": { "environment": "production" },
    "store": { "host": "redis.example.com", "port": 6379 }
  }
}
"#;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Environment Config Example ---");

  let config = EnvironmentConfig::from_json(DEPLOY_CONFIG).expect("config should parse");

  let ui = Arc::new(ConsoleUi::new(false));
  let mut pipeline = Pipeline::new(&["configure", "build"], ui);

  pipeline.register_named("configure", "announce", |ctx: Context| {
    info!("store settings: {:?}", ctx.get("store"));
    ready(Ok(None))
  });

  pipeline.register_named("build", "compile", |_ctx: Context| {
    let mut partial = Partial::new();
    partial.insert("built".to_string(), json!(true));
    ready(Ok(Some(partial)))
  });

  let seed = config.seed_for("development").expect("environment should exist");
  let final_context = pipeline.execute(seed).await.expect("pipeline should complete");

  assert_eq!(final_context.get("built"), Some(&json!(true)));
  info!("Final context: {}", serde_json::to_string_pretty(&final_context).unwrap());
}
