pub mod control;
pub mod step;

// Re-export key types for easier access from other relay modules (and lib.rs)
pub use control::{PipelineOutcome, Signal};
pub use step::{always_complete, always_error, always_next, noop, Step};
