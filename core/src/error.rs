// relay/src/error.rs
use thiserror::Error;

/// Fixed token carried by a rejection.
///
/// Hosting layers that key their fault handling on the rejection text can
/// match against this constant instead of a string literal.
pub const REJECT_TOKEN: &str = "reject";

/// Errors produced by running a pipeline.
///
/// There is exactly one failure mode: a step signalled
/// [`Error`](crate::Signal::Error) and the run was rejected. The abort is
/// immediate and total; no retry or partial-failure semantics exist inside
/// this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
  /// The run was rejected by a step. The remaining steps were skipped and
  /// the core wrote nothing to the response target; translating the
  /// rejection into an error response is the hosting layer's job.
  #[error("pipeline rejected: {token}")]
  Rejected {
    /// Always [`REJECT_TOKEN`].
    token: &'static str,
  },
}

impl RelayError {
  /// The rejection raised when a step signals `Error`.
  pub(crate) fn rejected() -> Self {
    RelayError::Rejected { token: REJECT_TOKEN }
  }
}

pub type RelayResult<T, E = RelayError> = std::result::Result<T, E>;
