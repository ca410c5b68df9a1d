pub mod context;
pub mod hook;
pub mod merge;

// Re-export key types for easier access from other hookline modules (and lib.rs)
pub use context::{Context, Partial};
pub use hook::{HookFn, RegisteredHook, ANONYMOUS_FUNCTION_NAME, CONFIGURE_HOOK, DID_FAIL_HOOK};
pub use merge::merge_into;
