// hookline/src/pipeline/definition.rs

//! Contains the `Pipeline` struct definition and the registration boundary.

use crate::core::context::{Context, Partial};
use crate::core::hook::{FnHook, HookFn, RegisteredHook, ANONYMOUS_FUNCTION_NAME, CONFIGURE_HOOK, DID_FAIL_HOOK};
use crate::notify::Ui;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tracing::{event, Level};

/// An ordered pipeline of named hooks, each holding an ordered list of
/// registered asynchronous functions.
///
/// The hook-name set is fixed at construction (`didFail` is implicitly
/// appended) and drives execution order. Registrations persist across
/// multiple `execute()` calls; the context does not.
pub struct Pipeline {
  /// Hook names in declaration order, `didFail` last.
  pub(crate) hook_names: Vec<String>,

  /// Per hook name, the registered functions in registration order.
  pub(crate) hooks: HashMap<String, Vec<RegisteredHook>>,

  pub(crate) ui: Arc<dyn Ui>,
}

impl Pipeline {
  /// Creates a pipeline over the given ordered hook names. `didFail` is
  /// appended if not already declared; duplicates are dropped.
  pub fn new(hook_names: &[&str], ui: Arc<dyn Ui>) -> Self {
    let mut names: Vec<String> = Vec::with_capacity(hook_names.len() + 1);
    for name in hook_names {
      if !names.iter().any(|n| n == name) {
        names.push((*name).to_string());
      }
    }
    if !names.iter().any(|n| n == DID_FAIL_HOOK) {
      names.push(DID_FAIL_HOOK.to_string());
    }

    let hooks = names.iter().map(|n| (n.clone(), Vec::new())).collect();

    Self {
      hook_names: names,
      hooks,
      ui,
    }
  }

  /// Registers a bare closure under a hook. The closure gets the generated
  /// display name `"anonymous function"`.
  pub fn register<F, Fut>(&mut self, hook_name: &str, f: F)
  where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Option<Partial>>> + Send + 'static,
  {
    self.register_hook(hook_name, ANONYMOUS_FUNCTION_NAME, Arc::new(FnHook::new(f)));
  }

  /// Registers a closure under a hook with an explicit display name.
  pub fn register_named<F, Fut>(&mut self, hook_name: &str, display_name: &str, f: F)
  where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Option<Partial>>> + Send + 'static,
  {
    self.register_hook(hook_name, display_name, Arc::new(FnHook::new(f)));
  }

  /// Registers a pre-built [`HookFn`] capability under a hook.
  ///
  /// Registration against an undeclared hook name is dropped silently; this
  /// tolerates plugins targeting optional hooks the host never declared.
  pub fn register_hook(&mut self, hook_name: &str, display_name: &str, callable: Arc<dyn HookFn>) {
    let Some(entries) = self.hooks.get_mut(hook_name) else {
      event!(
        Level::DEBUG,
        hook = hook_name,
        function = display_name,
        "Dropping registration for undeclared hook."
      );
      return;
    };

    if self.ui.verbose() {
      self
        .ui
        .write(&format!("Registering hook -> {}[{}]\n", hook_name, display_name));
    }

    entries.push(RegisteredHook {
      display_name: display_name.to_string(),
      callable,
    });
  }

  /// All hook names in execution order, including `didFail`.
  pub fn hook_names(&self) -> Vec<String> {
    self.hook_names.clone()
  }

  pub(crate) fn functions_for(&self, hook_name: &str) -> &[RegisteredHook] {
    self.hooks.get(hook_name).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Number of registered functions counted by the progress indicator:
  /// everything outside `configure` and `didFail`.
  pub(crate) fn progress_total(&self) -> usize {
    self
      .hook_names
      .iter()
      .filter(|name| name.as_str() != DID_FAIL_HOOK && name.as_str() != CONFIGURE_HOOK)
      .map(|name| self.functions_for(name).len())
      .sum()
  }
}

impl std::fmt::Debug for Pipeline {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("hook_names", &self.hook_names)
      .field("hooks", &self.hooks)
      .finish()
  }
}
