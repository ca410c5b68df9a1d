// hookline/src/core/context.rs

//! The shared context threaded through one `execute()` run.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde_json::{Map, Value};
use std::sync::Arc;

/// The subset of context fields a hook function returns for merging.
pub type Partial = Map<String, Value>;

/// The single mutable key-value mapping accumulated across one pipeline run.
///
/// Created fresh per `execute()` from the caller's seed map, handed (as a
/// cheap clone of the `Arc`) to every hook function in turn, and discarded
/// after settlement. Values follow the `serde_json::Value` model, so keys
/// hold scalars, sequences, or nested mappings.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code.
#[derive(Debug)]
pub struct Context(Arc<RwLock<Map<String, Value>>>);

impl Context {
  pub fn new(seed: Map<String, Value>) -> Self {
    Context(Arc::new(RwLock::new(seed)))
  }

  /// Acquires a read lock on the underlying map.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, Map<String, Value>> {
    self.0.read()
  }

  /// Acquires a write lock on the underlying map.
  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, Map<String, Value>> {
    self.0.write()
  }

  /// Clones the current contents. Used to hand the final mapping back to the
  /// caller on completion; the core retains nothing afterwards.
  pub fn snapshot(&self) -> Map<String, Value> {
    self.0.read().clone()
  }

  /// Convenience lookup of a single key, cloned out of the map.
  pub fn get(&self, key: &str) -> Option<Value> {
    self.0.read().get(key).cloned()
  }
}

impl Clone for Context {
  fn clone(&self) -> Self {
    Context(Arc::clone(&self.0))
  }
}

impl Default for Context {
  fn default() -> Self {
    Self::new(Map::new())
  }
}
