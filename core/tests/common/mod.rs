// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use relay::{Signal, Step};
use tracing::Level;

// --- Common Response/Request Fixtures ---

/// Stand-in for the hosting layer's mutable response target.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestResponse {
  pub status: u16,
  pub headers: Vec<(String, String)>,
  pub body: String,
  pub steps_executed: Vec<String>,
}

impl TestResponse {
  pub fn has_header(&self, name: &str) -> bool {
    self.headers.iter().any(|(n, _)| n == name)
  }
}

/// Stand-in for the hosting layer's request object.
#[derive(Clone, Debug, Default)]
pub struct TestRequest {
  pub path: String,
  pub admin: bool,
  pub authorized: bool,
}

impl TestRequest {
  pub fn to(path: &str) -> Self {
    TestRequest {
      path: path.to_string(),
      ..Default::default()
    }
  }
}

// --- Common Step Creators ---

/// A step that records its name on the response and returns the given signal.
pub fn create_recording_step(step_name: &'static str, signal: Signal) -> Step<TestResponse, TestRequest> {
  Box::new(move |res: &mut TestResponse, _req: &TestRequest| {
    res.steps_executed.push(step_name.to_string());
    tracing::debug!(target: "test_steps", step = %step_name, ?signal, "executed");
    signal
  })
}

/// A plain action appending one header; pair it with the `always_*` adapters.
pub fn set_header_action(
  name: &'static str,
  value: &'static str,
) -> impl Fn(&mut TestResponse, &TestRequest) + Send + Sync + 'static {
  move |res: &mut TestResponse, _req: &TestRequest| {
    res.headers.push((name.to_string(), value.to_string()));
  }
}

/// A plain action that writes the body and a 200 status.
pub fn write_body_action(body: &'static str) -> impl Fn(&mut TestResponse, &TestRequest) + Send + Sync + 'static {
  move |res: &mut TestResponse, _req: &TestRequest| {
    res.status = 200;
    res.body.push_str(body);
  }
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
