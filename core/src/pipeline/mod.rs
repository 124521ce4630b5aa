// relay/src/pipeline/mod.rs

//! Defines the `Pipeline<Res, Req>` struct, its construction, and its
//! signal-interpreting run loop.

pub mod definition;
pub mod execution;

// Re-export the main Pipeline struct and the free-function composer
pub use definition::{compose, Pipeline};
