//! Create-document request envelope.

// self
use crate::{
	_prelude::*,
	error::TransportError,
	schema::{Document, ProductGroup},
};

/// Transfer format of the document payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
	/// Inline JSON document.
	#[default]
	Manual,
	/// XML document.
	Xml,
	/// CSV document.
	Csv,
}

/// Registry document type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
	/// Introduction of domestically produced goods into circulation.
	#[default]
	LpIntroduceGoods,
}

/// Immutable create-document request sent to the registry.
///
/// The product group travels in the query string and is not part of the JSON body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
	/// Target product group.
	#[serde(skip)]
	pub product_group: ProductGroup,
	/// Transfer format tag.
	pub document_format: DocumentFormat,
	/// Document payload.
	#[serde(rename = "product_document")]
	pub document: Document,
	/// Detached signature over the document.
	pub signature: String,
	/// Document type tag.
	#[serde(rename = "type")]
	pub document_type: DocumentType,
}
impl SubmissionRequest {
	/// Builds an inline-JSON introduce-goods request.
	pub fn introduce_goods(
		product_group: ProductGroup,
		document: Document,
		signature: impl Into<String>,
	) -> Self {
		Self {
			product_group,
			document_format: DocumentFormat::Manual,
			document,
			signature: signature.into(),
			document_type: DocumentType::LpIntroduceGoods,
		}
	}

	/// Serializes the request body, reporting the JSON path of any failure.
	pub fn to_json(&self) -> Result<Vec<u8>, TransportError> {
		let mut body = Vec::new();
		let mut serializer = serde_json::Serializer::new(&mut body);

		serde_path_to_error::serialize(self, &mut serializer)
			.map_err(|source| TransportError::Serialize { source })?;

		Ok(body)
	}
}
