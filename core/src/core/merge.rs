// hookline/src/core/merge.rs

//! Type-directed deep merge of a hook function's partial result into the
//! shared context map.
//!
//! Merge rules, per key:
//!  - both values are sequences: existing ++ incoming (never deduplicated),
//!  - both values are mappings: merge recursively under the same rules,
//!  - incoming `Null` never replaces an existing value,
//!  - exactly one side is a sequence: `MergeConflict` (raised, not coerced),
//!  - otherwise the incoming value overwrites.

use crate::error::{PipelineError, PipelineResult};
use serde_json::{Map, Value};

/// Merges `partial` into `context` in place. On conflict the context is left
/// partially merged; the caller treats the error like any other hook failure
/// and aborts the run.
pub fn merge_into(context: &mut Map<String, Value>, partial: Map<String, Value>) -> PipelineResult<()> {
  merge_map(context, partial, None)
}

fn merge_map(
  target: &mut Map<String, Value>,
  incoming: Map<String, Value>,
  prefix: Option<&str>,
) -> PipelineResult<()> {
  for (key, value) in incoming {
    let path = match prefix {
      Some(p) => format!("{}.{}", p, key),
      None => key.clone(),
    };
    match target.get_mut(&key) {
      None => {
        target.insert(key, value);
      }
      Some(existing) => merge_value(&path, existing, value)?,
    }
  }
  Ok(())
}

fn merge_value(path: &str, existing: &mut Value, incoming: Value) -> PipelineResult<()> {
  match (existing, incoming) {
    // Null is "no value"; never overwrites what is already there.
    (_, Value::Null) => Ok(()),
    (Value::Array(have), Value::Array(add)) => {
      have.extend(add);
      Ok(())
    }
    (Value::Object(have), Value::Object(add)) => merge_map(have, add, Some(path)),
    (Value::Array(_), _) | (_, Value::Array(_)) => Err(PipelineError::MergeConflict {
      key: path.to_string(),
    }),
    (have, add) => {
      *have = add;
      Ok(())
    }
  }
}
