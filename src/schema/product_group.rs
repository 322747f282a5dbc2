//! Closed catalog of registry product groups.

// self
use crate::_prelude::*;

/// Error returned when a product group name is not part of the catalog.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown product group `{name}`.")]
pub struct UnknownProductGroup {
	/// Name that failed to match.
	pub name: String,
}

/// Regulatory product category that parameterizes the create-document endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductGroup {
	/// Apparel and textile goods.
	Clothes,
}
impl ProductGroup {
	/// Every catalog entry, ordered by registry code.
	pub const ALL: [ProductGroup; 1] = [ProductGroup::Clothes];

	/// Name sent as the `pg` query parameter.
	pub const fn as_str(self) -> &'static str {
		match self {
			ProductGroup::Clothes => "clothes",
		}
	}

	/// Numeric registry code.
	pub const fn code(self) -> u8 {
		match self {
			ProductGroup::Clothes => 1,
		}
	}

	/// Looks up a catalog entry by its numeric code.
	pub fn from_code(code: u8) -> Option<Self> {
		Self::ALL.into_iter().find(|group| group.code() == code)
	}
}
impl Display for ProductGroup {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ProductGroup {
	type Err = UnknownProductGroup;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|group| group.as_str() == s)
			.ok_or_else(|| UnknownProductGroup { name: s.to_owned() })
	}
}
