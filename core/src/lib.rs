// src/lib.rs

//! Relay: a minimal, signal-driven handler composition library.
//!
//! Relay chains request-handling steps into a single pipeline entry point:
//!  - Each step returns a tri-state [`Signal`] — continue to the next step,
//!    complete the run early, or reject it.
//!  - Adapters wrap plain side-effecting actions into steps with a fixed
//!    signal ([`always_next`], [`always_complete`], [`always_error`]).
//!  - A [`branch`] combinator delegates to one of two steps based on a
//!    predicate evaluated against the live response/request pair.
//!  - The composed [`Pipeline`] runs its steps strictly in order against
//!    one shared response/request pair and reports the result as an
//!    ordinary return value; a rejection carries the fixed token
//!    [`REJECT_TOKEN`].
//!
//! The response target and request object are opaque type parameters owned
//! by the hosting HTTP layer; relay performs no I/O of its own and holds no
//! state across invocations, so one composed pipeline may serve concurrent
//! requests without locking.

// Declare modules according to the planned structure
pub mod conditional;
pub mod core;
pub mod error;
pub mod pipeline;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::control::{PipelineOutcome, Signal};
pub use crate::core::step::{always_complete, always_error, always_next, noop, Step};

// The branch combinator
pub use crate::conditional::branch;

// The main Pipeline struct and the free-function composer
pub use crate::pipeline::definition::{compose, Pipeline};

pub use crate::error::{RelayError, RelayResult, REJECT_TOKEN};
