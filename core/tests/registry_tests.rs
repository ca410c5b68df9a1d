// tests/registry_tests.rs
mod common;

use common::*;
use hookline::{Pipeline, DID_FAIL_HOOK};
use serial_test::serial;
use std::sync::Arc;

#[tokio::test]
#[serial]
async fn registering_under_undeclared_hook_is_a_silent_no_op() {
  setup_tracing();
  let ui = quiet_ui();
  let mut pipeline = Pipeline::new(&["build"], Arc::clone(&ui) as Arc<dyn hookline::Ui>);

  let log = call_log();
  pipeline.register_named("nonexistent", "ghost", recording_fn(&log, "ghost"));
  pipeline.register_named("build", "real", recording_fn(&log, "real"));

  let result = pipeline.execute_default().await;

  assert!(result.is_ok());
  assert_eq!(*log.lock().unwrap(), vec!["real"]);
  assert!(ui.lines().is_empty());
  assert!(ui.error_lines().is_empty());
}

#[test]
fn did_fail_is_implicitly_appended_last() {
  let pipeline = Pipeline::new(&["configure", "build", "deploy"], quiet_ui());
  assert_eq!(pipeline.hook_names(), vec!["configure", "build", "deploy", DID_FAIL_HOOK]);
}

#[test]
fn declared_did_fail_is_not_duplicated() {
  let pipeline = Pipeline::new(&["build", DID_FAIL_HOOK], quiet_ui());
  assert_eq!(pipeline.hook_names(), vec!["build", DID_FAIL_HOOK]);
}

#[test]
fn duplicate_hook_names_are_dropped() {
  let pipeline = Pipeline::new(&["build", "build", "deploy"], quiet_ui());
  assert_eq!(pipeline.hook_names(), vec!["build", "deploy", DID_FAIL_HOOK]);
}

#[test]
fn verbose_ui_logs_registrations() {
  let ui = verbose_ui();
  let mut pipeline = Pipeline::new(&["build"], Arc::clone(&ui) as Arc<dyn hookline::Ui>);

  let log = call_log();
  pipeline.register("build", recording_fn(&log, "anon"));
  pipeline.register_named("build", "upload", recording_fn(&log, "upload"));

  assert!(ui.has_line_containing("Registering hook -> build[anonymous function]"));
  assert!(ui.has_line_containing("Registering hook -> build[upload]"));
}

#[test]
fn quiet_ui_does_not_log_registrations() {
  let ui = quiet_ui();
  let mut pipeline = Pipeline::new(&["build"], Arc::clone(&ui) as Arc<dyn hookline::Ui>);

  let log = call_log();
  pipeline.register("build", recording_fn(&log, "anon"));

  assert!(ui.lines().is_empty());
}
