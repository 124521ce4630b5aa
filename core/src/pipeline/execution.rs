// relay/src/pipeline/execution.rs

//! Contains `Pipeline::run()`, the signal-interpretation loop at the heart
//! of the crate, and `Pipeline::into_step()` for nesting one pipeline as a
//! step of another.

use crate::core::control::{PipelineOutcome, Signal};
use crate::core::step::Step;
use crate::error::RelayError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

impl<Res, Req> Pipeline<Res, Req> {
  /// Runs the chain against one response/request pair.
  ///
  /// Steps run strictly in the order supplied, each fully returning its
  /// [`Signal`] before the next begins:
  ///
  /// - [`Signal::Next`] advances to the following step. Exhausting the
  ///   chain this way yields `Ok(`[`PipelineOutcome::Completed`]`)` — the
  ///   empty chain completes immediately.
  /// - [`Signal::Complete`] ends the run successfully with
  ///   `Ok(`[`PipelineOutcome::Stopped`]`)`; later steps never run.
  /// - [`Signal::Error`] rejects the run with [`RelayError::Rejected`];
  ///   later steps never run and this crate writes nothing to the response
  ///   target on the way out.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            response_type = %std::any::type_name::<Res>(),
            request_type = %std::any::type_name::<Req>(),
            num_steps = self.steps.len(),
        ),
        err(Display)
    )]
  pub fn run(&self, res: &mut Res, req: &Req) -> Result<PipelineOutcome, RelayError> {
    event!(Level::DEBUG, "Pipeline run starting.");

    for (step_idx, step) in self.steps.iter().enumerate() {
      let step_span = span!(Level::DEBUG, "pipeline_step", step_index = step_idx);
      let _step_span_guard = step_span.enter();

      match step(res, req) {
        Signal::Next => {
          event!(Level::TRACE, "Step signalled Next.");
        }
        Signal::Complete => {
          event!(Level::DEBUG, "Step signalled Complete; remaining steps skipped.");
          return Ok(PipelineOutcome::Stopped);
        }
        Signal::Error => {
          event!(Level::WARN, "Step signalled Error; run rejected.");
          return Err(RelayError::rejected());
        }
      }
    }

    event!(Level::DEBUG, "Chain exhausted; run completed.");
    Ok(PipelineOutcome::Completed)
  }
}

impl<Res, Req> Pipeline<Res, Req>
where
  Res: 'static,
  Req: 'static,
{
  /// Re-enters this whole pipeline as a single [`Step`] of an outer chain.
  ///
  /// The run outcome folds back into the outer chain's signal:
  /// [`PipelineOutcome::Completed`] becomes [`Signal::Next`],
  /// [`PipelineOutcome::Stopped`] becomes [`Signal::Complete`], and a
  /// rejection becomes [`Signal::Error`], so the outer run rejects exactly
  /// where the inner one did.
  pub fn into_step(self) -> Step<Res, Req> {
    Box::new(move |res, req| match self.run(res, req) {
      Ok(PipelineOutcome::Completed) => Signal::Next,
      Ok(PipelineOutcome::Stopped) => Signal::Complete,
      Err(_) => Signal::Error,
    })
  }
}
