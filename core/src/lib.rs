// src/lib.rs

//! Hookline: an ordered, asynchronous hook pipeline.
//!
//! Hookline lets a host declare named extension points ("hooks") in a fixed
//! order and lets plugins register asynchronous functions against them:
//!  - Functions run strictly sequentially, in declaration then registration
//!    order, never concurrently.
//!  - Each function's partial result is deep-merged into a shared context
//!    (sequence-valued keys concatenate) before the next function runs.
//!  - Transitions are reported uniformly: verbose structured log lines, or a
//!    tick-per-function progress indicator.
//!  - On any failure the always-present `didFail` hook runs exactly once
//!    against the context as of the failure point, then the run aborts.

// Declare modules according to the planned structure
pub mod config;
pub mod core;
pub mod error;
pub mod notify;
pub mod pipeline;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::context::{Context, Partial};
pub use crate::core::hook::{HookFn, RegisteredHook, ANONYMOUS_FUNCTION_NAME, CONFIGURE_HOOK, DID_FAIL_HOOK};
pub use crate::core::merge::merge_into;

// The main Pipeline struct
pub use crate::pipeline::Pipeline;

// Transition reporting: the Ui collaborator and the Notifier observer
pub use crate::notify::{ConsoleUi, Notifier, ProgressNotifier, Ui, VerboseNotifier};

// Environment-keyed seed configuration
pub use crate::config::EnvironmentConfig;

pub use crate::error::{PipelineError, PipelineResult};
