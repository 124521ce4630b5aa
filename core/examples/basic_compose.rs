// relay/examples/basic_compose.rs

use relay::{always_complete, always_next, compose, PipelineOutcome};
use tracing::info;

// 1. Define the response target and request objects. These are normally
//    owned by the hosting HTTP layer; relay never looks inside them.
#[derive(Debug, Default)]
struct Response {
  status: u16,
  headers: Vec<(String, String)>,
  body: String,
}

#[derive(Debug)]
struct Request {
  path: String,
}

fn main() {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Compose Example ---");

  // 2. Compose a chain: two header steps that pass control along, then a
  //    body step that completes the run.
  let pipeline = compose(vec![
    always_next(|res: &mut Response, _req: &Request| {
      res.headers.push(("x-served-by".to_string(), "relay".to_string()));
    }),
    always_next(|res: &mut Response, req: &Request| {
      res.headers.push(("x-path".to_string(), req.path.clone()));
    }),
    always_complete(|res: &mut Response, _req: &Request| {
      res.status = 200;
      res.body.push_str("hello from the chain");
    }),
  ]);

  // 3. Invoke it as the hosting layer would, once per request.
  let mut res = Response::default();
  let req = Request {
    path: "/hello".to_string(),
  };

  info!("Starting pipeline run...");
  let outcome = pipeline.run(&mut res, &req).expect("this chain never rejects");

  // 4. Inspect the results
  match outcome {
    PipelineOutcome::Completed => info!("Every step signalled Next."),
    PipelineOutcome::Stopped => info!("A step completed the run early."),
  }
  info!("Final status: {}", res.status);
  for (name, value) in &res.headers {
    info!("Header: {}: {}", name, value);
  }
  info!("Body: {}", res.body);

  assert_eq!(outcome, PipelineOutcome::Stopped);
  assert_eq!(res.status, 200);
  assert_eq!(res.headers.len(), 2);
  assert_eq!(res.body, "hello from the chain");
}
