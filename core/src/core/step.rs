// relay/src/core/step.rs

//! Defines the `Step` contract and the adapters that wrap a plain action
//! into a step with a fixed continuation signal.

use crate::core::control::Signal;

/// Type alias for a pipeline step.
///
/// A step receives the mutable response target and the request for the
/// current run, performs its work, and returns a [`Signal`] deciding whether
/// the chain continues. Steps are boxed closures so they may capture
/// arbitrary external state; the `Send + Sync` bounds keep a composed
/// pipeline shareable across request-serving threads.
///
/// The response/request pair is shared scratch space for one run: any step
/// may mutate the response target, and later steps observe earlier
/// mutations.
pub type Step<Res, Req> = Box<dyn Fn(&mut Res, &Req) -> Signal + Send + Sync>;

/// A plain action that does nothing. Useful as a placeholder leaf in a
/// conditional branch.
pub fn noop<Res, Req>(_res: &mut Res, _req: &Req) {}

/// Wraps `action` into a [`Step`] that runs it and unconditionally signals
/// [`Signal::Next`].
pub fn always_next<Res, Req, A>(action: A) -> Step<Res, Req>
where
  A: Fn(&mut Res, &Req) + Send + Sync + 'static,
{
  Box::new(move |res, req| {
    action(res, req);
    Signal::Next
  })
}

/// Wraps `action` into a [`Step`] that runs it and unconditionally signals
/// [`Signal::Complete`].
pub fn always_complete<Res, Req, A>(action: A) -> Step<Res, Req>
where
  A: Fn(&mut Res, &Req) + Send + Sync + 'static,
{
  Box::new(move |res, req| {
    action(res, req);
    Signal::Complete
  })
}

/// Wraps `action` into a [`Step`] that runs it and unconditionally signals
/// [`Signal::Error`]. The action's side effects land before the run is
/// rejected.
pub fn always_error<Res, Req, A>(action: A) -> Step<Res, Req>
where
  A: Fn(&mut Res, &Req) + Send + Sync + 'static,
{
  Box::new(move |res, req| {
    action(res, req);
    Signal::Error
  })
}
