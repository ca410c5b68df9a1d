// hookline/src/core/hook.rs

//! The hook-function capability and the normalized registration record.

use crate::core::context::{Context, Partial};
use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// The hook that always exists and runs exactly once on failure, before the
/// original error is re-raised.
pub const DID_FAIL_HOOK: &str = "didFail";

/// The hook excluded from progress-tick counting. It still executes and
/// still logs in verbose mode.
pub const CONFIGURE_HOOK: &str = "configure";

/// Display name generated for bare closures registered without one.
pub const ANONYMOUS_FUNCTION_NAME: &str = "anonymous function";

/// A single registered unit of work bound to one hook.
///
/// `invoke` receives the shared [`Context`] and resolves to an optional
/// [`Partial`] to be merged back in. `Ok(None)` leaves the context unchanged.
/// Failures (whether raised before or after the first suspension point) share
/// one channel: the returned `Result`.
#[async_trait]
pub trait HookFn: Send + Sync {
  async fn invoke(&self, context: Context) -> anyhow::Result<Option<Partial>>;
}

type BoxedHookFuture = Pin<Box<dyn Future<Output = anyhow::Result<Option<Partial>>> + Send>>;

/// Adapter letting plain async closures act as a [`HookFn`].
pub(crate) struct FnHook {
  f: Box<dyn Fn(Context) -> BoxedHookFuture + Send + Sync>,
}

impl FnHook {
  pub(crate) fn new<F, Fut>(f: F) -> Self
  where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<Option<Partial>>> + Send + 'static,
  {
    Self {
      f: Box::new(move |context| Box::pin(f(context)) as BoxedHookFuture),
    }
  }
}

#[async_trait]
impl HookFn for FnHook {
  async fn invoke(&self, context: Context) -> anyhow::Result<Option<Partial>> {
    (self.f)(context).await
  }
}

/// Normalized registration record. Every registration, whether a bare closure
/// or an explicitly named function, ends up in this shape at the boundary.
#[derive(Clone)]
pub struct RegisteredHook {
  pub display_name: String,
  pub callable: Arc<dyn HookFn>,
}

// Arc<dyn HookFn> has no Debug; report the name only.
impl std::fmt::Debug for RegisteredHook {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RegisteredHook")
      .field("display_name", &self.display_name)
      .finish()
  }
}
