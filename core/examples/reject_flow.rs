// relay/examples/reject_flow.rs

use relay::{always_error, always_next, compose, RelayError, REJECT_TOKEN};
use tracing::{error, info, warn};

// 1. Define Response/Request stand-ins
#[derive(Debug, Default)]
struct Response {
  status: u16,
  body: String,
}

#[derive(Debug)]
struct Request {
  path: String,
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Reject Flow Example ---");

  // 2. A chain that logs the request and then rejects it. The third step
  //    exists to show it is never reached.
  let pipeline = compose(vec![
    always_next(|_res: &mut Response, req: &Request| {
      info!("request received for {}", req.path);
    }),
    always_error(|_res: &mut Response, req: &Request| {
      warn!("no credentials presented for {}; rejecting", req.path);
    }),
    always_next(|res: &mut Response, _req: &Request| {
      // This step should not be reached
      error!("step after rejection ran (SHOULD NOT HAPPEN)");
      res.body.push_str("never written");
    }),
  ]);

  // 3. Run the pipeline (expecting the rejection).
  let mut res = Response::default();
  let req = Request {
    path: "/admin".to_string(),
  };

  match pipeline.run(&mut res, &req) {
    Ok(outcome) => {
      error!("run finished with {:?}, but was expected to reject!", outcome);
    }
    Err(RelayError::Rejected { token }) => {
      // The hosting layer would now turn this into an error response; the
      // core left the response target untouched.
      info!("run rejected with token '{}'", token);
      assert_eq!(token, REJECT_TOKEN);
    }
  }

  assert_eq!(res.status, 0, "rejection must not write a status");
  assert!(res.body.is_empty(), "step after rejection was unexpectedly executed");
}
