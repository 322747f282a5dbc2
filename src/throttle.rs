//! Rolling-window throttle gate shared by every submission.
//!
//! [`ThrottleGate`] admits at most [`RateLimit::limit`] callers within any trailing
//! [`RateLimit::window`]. Admission checks run under a short-lived mutex; callers that find the
//! window full release the lock, sleep until the oldest grant ages out, and re-evaluate. The
//! recorded grant instant is always the post-wait clock reading.
//!
//! Admissions are granted in the order callers win the mutex after waking, not in arrival order:
//! a sleeping caller can be overtaken by a later caller that finds a slot already free.

mod rate;
mod window;

pub use rate::*;
pub use window::*;

// std
use std::{convert::Infallible, future};
// crates.io
use tokio::time;
// self
use crate::{_prelude::*, obs};

/// Errors surfaced while waiting for admission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ThisError)]
pub enum ThrottleError {
	/// Cancellation fired before a slot was granted; the window was left untouched.
	#[error("Throttle wait was cancelled.")]
	Cancelled,
}

/// Concurrency-safe rolling-window limiter.
///
/// Share one gate between callers with [`Arc`]; the gate has no global state.
#[derive(Debug)]
pub struct ThrottleGate {
	rate: RateLimit,
	window: Mutex<GrantWindow>,
}
impl ThrottleGate {
	/// Creates a gate with an empty grant window.
	pub fn new(rate: RateLimit) -> Self {
		Self { rate, window: Mutex::new(GrantWindow::new(rate)) }
	}

	/// Budget enforced by this gate.
	pub fn rate_limit(&self) -> RateLimit {
		self.rate
	}

	/// Number of grants currently held in the window.
	pub fn len(&self) -> usize {
		self.window.lock().len()
	}

	/// Returns `true` when nothing has been admitted yet.
	pub fn is_empty(&self) -> bool {
		self.window.lock().is_empty()
	}

	/// Time until the next caller would be admitted without waiting.
	pub fn time_until_available(&self) -> Duration {
		let window = self.window.lock();

		window.time_until_available(Instant::now())
	}

	/// Attempts an admission without waiting.
	///
	/// Returns the remaining wait when the window is full.
	pub fn try_acquire(&self) -> Result<(), Duration> {
		match self.admit_now() {
			Admission::Granted => Ok(()),
			Admission::Wait(wait) => Err(wait),
		}
	}

	/// Waits until a slot is free and records the grant.
	///
	/// Dropping the returned future before it resolves leaves the window unchanged.
	pub async fn acquire(&self) {
		match self.acquire_inner(future::pending::<Infallible>()).await {
			Ok(()) => {},
			Err(never) => match never {},
		}
	}

	/// Waits until a slot is free or `cancel` fires.
	///
	/// An already-cancelled token is refused before touching the window.
	pub async fn acquire_with(&self, cancel: &CancellationToken) -> Result<(), ThrottleError> {
		if cancel.is_cancelled() {
			return Err(ThrottleError::Cancelled);
		}

		self.acquire_inner(async {
			cancel.cancelled().await;

			ThrottleError::Cancelled
		})
		.await
	}

	// Resolves with the output of `cancelled` if it completes before a slot frees up.
	async fn acquire_inner<F, E>(&self, cancelled: F) -> Result<(), E>
	where
		F: Future<Output = E>,
	{
		tokio::pin!(cancelled);

		loop {
			let wait = match self.admit_now() {
				Admission::Granted => return Ok(()),
				Admission::Wait(wait) => wait,
			};

			#[cfg(feature = "tracing")]
			tracing::debug!(
				wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
				limit = self.rate.limit(),
				"Throttle window is full; waiting for the oldest grant to expire."
			);
			obs::record_throttle_wait(wait);

			tokio::select! {
				biased;
				reason = &mut cancelled => return Err(reason),
				_ = time::sleep(wait) => {},
			}
		}
	}

	fn admit_now(&self) -> Admission {
		let mut window = self.window.lock();

		// Clock is read under the lock so grants enter the window in order.
		window.try_admit(Instant::now())
	}
}
