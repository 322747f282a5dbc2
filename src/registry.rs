//! Registry descriptor: where documents are sent and how fast.
//!
//! The descriptor is validated once at build time so the submission path never has to
//! re-check the base URL or the rate budget.

/// Builder API for assembling registry descriptors.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, error::ConfigError, schema::ProductGroup, throttle::RateLimit};

/// Immutable registry configuration consumed by [`RegistryClient`](crate::client::RegistryClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RegistryDescriptorBuilder")]
pub struct RegistryDescriptor {
	/// API root, e.g. `https://ismp.crpt.ru/api/v3`.
	pub base_url: Url,
	/// Global submission budget shared by every product group.
	pub rate_limit: RateLimit,
}
impl RegistryDescriptor {
	/// Production API root.
	pub const DEFAULT_BASE_URL: &'static str = "https://ismp.crpt.ru/api/v3";
	/// Path of the create-document endpoint relative to the API root.
	pub const CREATE_DOCUMENT_PATH: &'static str = "lk/documents/create";

	/// Creates a new builder seeded with the production base URL.
	pub fn builder() -> RegistryDescriptorBuilder {
		RegistryDescriptorBuilder::default()
	}

	/// Resolves the create-document endpoint for `product_group`.
	pub fn create_document_url(&self, product_group: ProductGroup) -> Result<Url, ConfigError> {
		let mut base = self.base_url.clone();

		// Keep the last path segment of the API root when joining.
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());

			base.set_path(&path);
		}

		let mut url = base
			.join(Self::CREATE_DOCUMENT_PATH)
			.map_err(|source| ConfigError::InvalidEndpoint { source })?;

		url.query_pairs_mut().clear().append_pair("pg", product_group.as_str());

		Ok(url)
	}
}
