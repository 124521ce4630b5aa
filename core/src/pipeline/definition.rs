// relay/src/pipeline/definition.rs

//! Contains the `Pipeline<Res, Req>` struct definition and its construction
//! entry points.

use crate::core::step::Step;

/// An ordered chain of [`Step`]s composed into a single request-handling
/// entry point.
///
/// `Res` is the mutable response target and `Req` the request object, both
/// owned by the hosting layer and opaque to this crate. A pipeline is
/// constructed once from a fixed list of steps and invoked many times (once
/// per incoming request) through [`run`](Pipeline::run). It holds no
/// invocation-spanning mutable state, so one instance may serve concurrent
/// requests without locking.
pub struct Pipeline<Res, Req> {
  /// Ordered list of steps for this pipeline.
  pub(crate) steps: Vec<Step<Res, Req>>,
}

impl<Res, Req> Pipeline<Res, Req> {
  /// Creates a pipeline from an ordered list of steps.
  pub fn new(steps: impl IntoIterator<Item = Step<Res, Req>>) -> Self {
    Self {
      steps: steps.into_iter().collect(),
    }
  }

  /// Number of steps in the chain.
  pub fn len(&self) -> usize {
    self.steps.len()
  }

  /// Whether the chain has no steps. An empty pipeline runs zero steps and
  /// completes immediately.
  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

impl<Res, Req> FromIterator<Step<Res, Req>> for Pipeline<Res, Req> {
  fn from_iter<I: IntoIterator<Item = Step<Res, Req>>>(iter: I) -> Self {
    Pipeline::new(iter)
  }
}

// Steps are opaque closures, so Debug reports the chain shape only.
impl<Res, Req> std::fmt::Debug for Pipeline<Res, Req> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline").field("num_steps", &self.steps.len()).finish()
  }
}

/// Composes an ordered list of steps into a [`Pipeline`].
///
/// Free-function spelling of [`Pipeline::new`], for call sites that read
/// better as `compose(vec![...])`.
pub fn compose<Res, Req>(steps: Vec<Step<Res, Req>>) -> Pipeline<Res, Req> {
  Pipeline::new(steps)
}
