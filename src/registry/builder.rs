// self
use crate::{_prelude::*, registry::RegistryDescriptor, throttle::RateLimit};

/// Errors raised while constructing or validating descriptors.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum RegistryDescriptorError {
	/// A submission budget is mandatory.
	#[error("Missing registry rate limit.")]
	MissingRateLimit,
	/// The built-in base URL could not be parsed.
	#[error("Registry base URL is invalid.")]
	InvalidBaseUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL must use HTTPS.
	#[error("The registry base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// Base URL that failed validation.
		url: String,
	},
	/// Base URL cannot carry a path (e.g. `mailto:`).
	#[error("The registry base URL cannot be used as an API root: {url}.")]
	OpaqueBaseUrl {
		/// Base URL that failed validation.
		url: String,
	},
}

/// Builder for [`RegistryDescriptor`] values.
///
/// Also the on-disk configuration shape: `{ "base_url": "...", "rate_limit": { ... } }`, with
/// `base_url` optional.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RegistryDescriptorBuilder {
	/// API root; defaults to [`RegistryDescriptor::DEFAULT_BASE_URL`].
	#[serde(default)]
	pub base_url: Option<Url>,
	/// Global submission budget.
	#[serde(default)]
	pub rate_limit: Option<RateLimit>,
}
impl RegistryDescriptorBuilder {
	/// Overrides the API root.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = Some(url);

		self
	}

	/// Sets the submission budget.
	pub fn rate_limit(mut self, rate_limit: RateLimit) -> Self {
		self.rate_limit = Some(rate_limit);

		self
	}

	/// Consumes the builder and validates the resulting descriptor.
	pub fn build(self) -> Result<RegistryDescriptor, RegistryDescriptorError> {
		let rate_limit = self.rate_limit.ok_or(RegistryDescriptorError::MissingRateLimit)?;
		let base_url = match self.base_url {
			Some(url) => url,
			None => Url::parse(RegistryDescriptor::DEFAULT_BASE_URL)
				.map_err(|source| RegistryDescriptorError::InvalidBaseUrl { source })?,
		};
		let descriptor = RegistryDescriptor { base_url, rate_limit };

		descriptor.validate()?;

		Ok(descriptor)
	}
}
impl TryFrom<RegistryDescriptorBuilder> for RegistryDescriptor {
	type Error = RegistryDescriptorError;

	fn try_from(builder: RegistryDescriptorBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}

impl RegistryDescriptor {
	/// Validates invariants for the descriptor.
	fn validate(&self) -> Result<(), RegistryDescriptorError> {
		if self.base_url.scheme() != "https" {
			return Err(RegistryDescriptorError::InsecureBaseUrl {
				url: self.base_url.to_string(),
			});
		}
		if self.base_url.cannot_be_a_base() {
			return Err(RegistryDescriptorError::OpaqueBaseUrl { url: self.base_url.to_string() });
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn budget() -> RateLimit {
		RateLimit::per_second(10).expect("Rate limit fixture should be valid.")
	}

	#[test]
	fn builder_requires_rate_limit() {
		assert_eq!(
			RegistryDescriptor::builder().build(),
			Err(RegistryDescriptorError::MissingRateLimit)
		);
	}

	#[test]
	fn builder_defaults_to_production_root() {
		let descriptor = RegistryDescriptor::builder()
			.rate_limit(budget())
			.build()
			.expect("Default descriptor should build.");

		assert_eq!(descriptor.base_url.as_str(), RegistryDescriptor::DEFAULT_BASE_URL);
		assert_eq!(descriptor.rate_limit, budget());
	}

	#[test]
	fn builder_rejects_insecure_roots() {
		let err = RegistryDescriptor::builder()
			.base_url(Url::parse("http://ismp.crpt.ru/api/v3").expect("Test URL should parse."))
			.rate_limit(budget())
			.build()
			.expect_err("Plain HTTP roots must be rejected.");

		assert!(matches!(err, RegistryDescriptorError::InsecureBaseUrl { .. }));
	}
}
