// relay/examples/branch_routing.rs

use relay::{always_complete, branch, compose, PipelineOutcome};
use tracing::info;

// 1. Define Response/Request stand-ins
#[derive(Debug, Default)]
struct Response {
  status: u16,
  body: String,
}

#[derive(Debug)]
struct Request {
  user: String,
  admin: bool,
}

fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Branch Routing Example ---");

  // 2. One branch step composed alone: the page is picked by privilege,
  //    and either side completes the run.
  let pipeline = compose(vec![branch(
    |_res: &Response, req: &Request| req.admin,
    always_complete(|res: &mut Response, req: &Request| {
      res.status = 200;
      res.body = format!("admin console for {}", req.user);
    }),
    always_complete(|res: &mut Response, req: &Request| {
      res.status = 200;
      res.body = format!("dashboard for {}", req.user);
    }),
  )]);

  // 3. Route two requests through the same pipeline.
  for (user, admin) in [("root", true), ("guest", false)] {
    let mut res = Response::default();
    let req = Request {
      user: user.to_string(),
      admin,
    };

    let outcome = pipeline.run(&mut res, &req).expect("the branch never rejects");

    assert_eq!(outcome, PipelineOutcome::Stopped);
    assert_eq!(res.status, 200);
    info!("{} (admin: {}) -> {}", user, admin, res.body);
  }

  info!("Both requests routed through exactly one branch each.");
}
