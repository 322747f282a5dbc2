// std
use std::collections::VecDeque;
// self
use crate::{_prelude::*, throttle::RateLimit};

/// Result of a single admission attempt against a [`GrantWindow`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
	/// The grant was recorded at the observed instant.
	Granted,
	/// The window is full; the oldest grant leaves it after the contained duration.
	Wait(Duration),
}

/// Ordered record of the most recent grant instants, bounded by the request limit.
///
/// The window performs no locking and never reads a clock; callers pass the current instant in.
/// [`ThrottleGate`](crate::throttle::ThrottleGate) owns one behind its mutex.
#[derive(Clone, Debug)]
pub struct GrantWindow {
	rate: RateLimit,
	grants: VecDeque<Instant>,
}
impl GrantWindow {
	/// Creates an empty window for the provided budget.
	///
	/// Storage grows with admissions and never exceeds the limit, so huge budgets cost nothing
	/// up front.
	pub fn new(rate: RateLimit) -> Self {
		Self { rate, grants: VecDeque::new() }
	}

	/// Admits a request at `now` or reports how long until a slot frees up.
	///
	/// Nothing is mutated when [`Admission::Wait`] is returned. Instants earlier than the newest
	/// recorded grant are clamped to it so the window stays ordered.
	pub fn try_admit(&mut self, now: Instant) -> Admission {
		let now = match self.grants.back() {
			Some(&newest) if newest > now => newest,
			_ => now,
		};

		if self.grants.len() >= self.rate.limit() {
			let wait = self.time_until_available(now);

			if !wait.is_zero() {
				return Admission::Wait(wait);
			}

			self.grants.pop_front();
		}

		self.grants.push_back(now);

		Admission::Granted
	}

	/// Time remaining until a call at `now` would be admitted; zero when a slot is free.
	pub fn time_until_available(&self, now: Instant) -> Duration {
		if self.grants.len() < self.rate.limit() {
			return Duration::ZERO;
		}

		self.grants
			.front()
			.map(|&oldest| self.rate.window().saturating_sub(now.saturating_duration_since(oldest)))
			.unwrap_or(Duration::ZERO)
	}

	/// Number of grants currently recorded.
	pub fn len(&self) -> usize {
		self.grants.len()
	}

	/// Returns `true` when no grant has been recorded yet.
	pub fn is_empty(&self) -> bool {
		self.grants.is_empty()
	}

	/// Iterates over recorded grants from oldest to newest.
	pub fn iter(&self) -> impl Iterator<Item = &Instant> {
		self.grants.iter()
	}
}
