// self
use crate::_prelude::*;

/// Errors raised while constructing a [`RateLimit`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum RateLimitError {
	/// A zero request limit would block every caller forever.
	#[error("Request limit must be at least one request per window.")]
	ZeroLimit,
}

/// Immutable rolling-window budget: at most `limit` admissions within any trailing `window`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRateLimit", into = "RawRateLimit")]
pub struct RateLimit {
	limit: NonZeroUsize,
	window: Duration,
}
impl RateLimit {
	/// Creates a budget of `limit` requests per `window`.
	///
	/// A zero `window` disables throttling entirely; a zero `limit` is rejected.
	pub fn new(limit: usize, window: Duration) -> Result<Self, RateLimitError> {
		let limit = NonZeroUsize::new(limit).ok_or(RateLimitError::ZeroLimit)?;

		Ok(Self { limit, window })
	}

	/// `limit` requests per second.
	pub fn per_second(limit: usize) -> Result<Self, RateLimitError> {
		Self::new(limit, Duration::from_secs(1))
	}

	/// `limit` requests per minute.
	pub fn per_minute(limit: usize) -> Result<Self, RateLimitError> {
		Self::new(limit, Duration::from_secs(60))
	}

	/// `limit` requests per hour.
	pub fn per_hour(limit: usize) -> Result<Self, RateLimitError> {
		Self::new(limit, Duration::from_secs(60 * 60))
	}

	/// Maximum admissions per window.
	pub fn limit(&self) -> usize {
		self.limit.get()
	}

	/// Length of the trailing window.
	pub fn window(&self) -> Duration {
		self.window
	}

	/// Returns `true` when the window is zero and every caller is admitted immediately.
	pub fn is_unlimited(&self) -> bool {
		self.window.is_zero()
	}
}

#[derive(Serialize, Deserialize)]
struct RawRateLimit {
	limit: usize,
	window_ms: u64,
}
impl TryFrom<RawRateLimit> for RateLimit {
	type Error = RateLimitError;

	fn try_from(raw: RawRateLimit) -> Result<Self, Self::Error> {
		Self::new(raw.limit, Duration::from_millis(raw.window_ms))
	}
}
impl From<RateLimit> for RawRateLimit {
	fn from(rate: RateLimit) -> Self {
		Self {
			limit: rate.limit(),
			window_ms: u64::try_from(rate.window.as_millis()).unwrap_or(u64::MAX),
		}
	}
}
