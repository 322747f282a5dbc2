// self
use crate::{_prelude::*, obs::SubmissionOutcome, schema::ProductGroup};

/// Records a submission outcome via the global metrics recorder (when enabled).
pub fn record_submission_outcome(product_group: ProductGroup, outcome: SubmissionOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"crpt_submit_submission_total",
			"product_group" => product_group.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (product_group, outcome);
	}
}

/// Records that a caller found the throttle window full and had to wait.
pub fn record_throttle_wait(wait: Duration) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("crpt_submit_throttle_wait_total").increment(1);
		metrics::histogram!("crpt_submit_throttle_wait_seconds").record(wait.as_secs_f64());
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = wait;
	}
}
