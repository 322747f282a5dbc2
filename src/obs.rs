//! Optional observability helpers for submissions.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `crpt_submit.submission` with the
//!   `product_group` and `stage` fields, plus debug events whenever the throttle gate waits.
//! - Enable `metrics` to increment the `crpt_submit_submission_total` counter for every
//!   attempt/success/failure, labeled by `product_group` + `outcome`, and the
//!   `crpt_submit_throttle_wait_total` counter whenever a caller has to wait for a slot.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmissionOutcome {
	/// Entry to [`RegistryClient::submit`](crate::client::RegistryClient::submit).
	Attempt,
	/// Registry accepted the document.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SubmissionOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SubmissionOutcome::Attempt => "attempt",
			SubmissionOutcome::Success => "success",
			SubmissionOutcome::Failure => "failure",
		}
	}
}
impl Display for SubmissionOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
