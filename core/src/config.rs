// hookline/src/config.rs

//! Environment-keyed seed configuration.
//!
//! A configuration document maps environment names to key-value settings
//! consumed as opaque seed data for the initial context. The core never
//! interprets the contents.

use crate::error::{PipelineError, PipelineResult};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{event, Level};

/// Settings for every known environment, e.g.
///
/// ```json
/// {
///   "development": { "store": { "host": "localhost", "port": 6379 } },
///   "staging":     { "store": { "host": "redis.example.com", "port": 6379 } }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentConfig {
  environments: HashMap<String, Map<String, Value>>,
}

impl EnvironmentConfig {
  /// Parses a configuration document from a JSON string.
  pub fn from_json(raw: &str) -> PipelineResult<Self> {
    serde_json::from_str(raw).map_err(|e| PipelineError::Config { source: e.into() })
  }

  /// Loads and parses a configuration document from a file.
  pub fn from_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
    let path = path.as_ref();
    event!(Level::DEBUG, path = %path.display(), "Loading environment configuration.");
    let raw = std::fs::read_to_string(path).map_err(|e| PipelineError::Config { source: e.into() })?;
    Self::from_json(&raw)
  }

  /// The seed mapping for one environment, cloned out for use as the initial
  /// context of an `execute()` run.
  pub fn seed_for(&self, environment: &str) -> PipelineResult<Map<String, Value>> {
    self
      .environments
      .get(environment)
      .cloned()
      .ok_or_else(|| PipelineError::UnknownEnvironment {
        name: environment.to_string(),
      })
  }

  /// Names of all configured environments (unordered).
  pub fn environments(&self) -> impl Iterator<Item = &str> {
    self.environments.keys().map(String::as_str)
  }
}
