// relay/src/core/control.rs

//! Defines the per-step continuation signal and the outcome of a pipeline run.

/// Signal from a step indicating how the pipeline should proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
  /// Hand control to the next step in the chain.
  Next,
  /// Stop the chain here, successfully. Remaining steps are skipped.
  Complete,
  /// Reject the run. Remaining steps are skipped and the invocation returns
  /// the rejection error instead of an outcome.
  Error,
}

/// Outcome of a full pipeline run that was not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
  /// The chain was exhausted: every step returned [`Signal::Next`].
  /// An empty chain completes immediately.
  Completed,
  /// A step returned [`Signal::Complete`] before the chain was exhausted.
  Stopped,
}
