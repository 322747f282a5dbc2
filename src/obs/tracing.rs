// self
use crate::{_prelude::*, schema::ProductGroup};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedSubmission<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedSubmission<F> = F;

/// A span builder used by the submission client.
#[derive(Clone, Debug)]
pub struct SubmissionSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SubmissionSpan {
	/// Creates a new span tagged with the target product group + stage.
	pub fn new(product_group: ProductGroup, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"crpt_submit.submission",
				product_group = product_group.as_str(),
				stage
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (product_group, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedSubmission<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
