//! Introduce-goods document body and its product line items.

// self
use crate::_prelude::*;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Errors produced by [`DocumentBuilder`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum DocumentBuildError {
	/// A mandatory document field was not supplied.
	#[error("Document field `{field}` is required.")]
	MissingField {
		/// JSON name of the missing field.
		field: &'static str,
	},
}

/// How the goods being introduced were produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionType {
	/// Produced by the participant itself.
	OwnProduction,
	/// Produced under contract by a third party.
	ContractProduction,
}

/// Free-form description block attached to a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescription {
	/// Taxpayer number of the participant filing the document.
	#[serde(rename = "participantInn")]
	pub participant_inn: String,
}
impl DocumentDescription {
	/// Creates a description for the given participant.
	pub fn new(participant_inn: impl Into<String>) -> Self {
		Self { participant_inn: participant_inn.into() }
	}
}

/// Registry document introducing goods into circulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Optional description block.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<DocumentDescription>,
	/// Document identifier.
	#[serde(rename = "doc_id")]
	pub id: String,
	/// Document status.
	#[serde(rename = "doc_status")]
	pub status: String,
	/// Document type label.
	pub doc_type: String,
	/// Owner taxpayer number.
	pub owner_inn: String,
	/// Participant taxpayer number.
	pub participant_inn: String,
	/// Producer taxpayer number.
	pub producer_inn: String,
	/// Production date.
	#[serde(with = "iso_date")]
	pub production_date: Date,
	/// Production type.
	pub production_type: ProductionType,
	/// Line items covered by the document.
	#[serde(default)]
	pub products: Vec<Product>,
	/// Registration date.
	#[serde(with = "iso_date")]
	pub reg_date: Date,
	/// Registration number, when already assigned.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub reg_number: Option<String>,
}
impl Document {
	/// Returns a builder that enforces mandatory fields.
	pub fn builder() -> DocumentBuilder {
		DocumentBuilder::default()
	}
}

/// Builder for [`Document`].
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
	description: Option<DocumentDescription>,
	id: Option<String>,
	status: Option<String>,
	doc_type: Option<String>,
	owner_inn: Option<String>,
	participant_inn: Option<String>,
	producer_inn: Option<String>,
	production_date: Option<Date>,
	production_type: Option<ProductionType>,
	products: Vec<Product>,
	reg_date: Option<Date>,
	reg_number: Option<String>,
}
impl DocumentBuilder {
	/// Sets the description block.
	pub fn description(mut self, description: DocumentDescription) -> Self {
		self.description = Some(description);

		self
	}

	/// Sets the document identifier.
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = Some(id.into());

		self
	}

	/// Sets the document status.
	pub fn status(mut self, status: impl Into<String>) -> Self {
		self.status = Some(status.into());

		self
	}

	/// Sets the document type label.
	pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
		self.doc_type = Some(doc_type.into());

		self
	}

	/// Sets the owner taxpayer number.
	pub fn owner_inn(mut self, inn: impl Into<String>) -> Self {
		self.owner_inn = Some(inn.into());

		self
	}

	/// Sets the participant taxpayer number.
	pub fn participant_inn(mut self, inn: impl Into<String>) -> Self {
		self.participant_inn = Some(inn.into());

		self
	}

	/// Sets the producer taxpayer number.
	pub fn producer_inn(mut self, inn: impl Into<String>) -> Self {
		self.producer_inn = Some(inn.into());

		self
	}

	/// Sets the production date.
	pub fn production_date(mut self, date: Date) -> Self {
		self.production_date = Some(date);

		self
	}

	/// Sets the production type.
	pub fn production_type(mut self, production_type: ProductionType) -> Self {
		self.production_type = Some(production_type);

		self
	}

	/// Appends a single line item.
	pub fn product(mut self, product: Product) -> Self {
		self.products.push(product);

		self
	}

	/// Appends multiple line items.
	pub fn products<I>(mut self, products: I) -> Self
	where
		I: IntoIterator<Item = Product>,
	{
		self.products.extend(products);

		self
	}

	/// Sets the registration date.
	pub fn reg_date(mut self, date: Date) -> Self {
		self.reg_date = Some(date);

		self
	}

	/// Sets the registration number.
	pub fn reg_number(mut self, number: impl Into<String>) -> Self {
		self.reg_number = Some(number.into());

		self
	}

	/// Consumes the builder and produces a [`Document`].
	pub fn build(self) -> Result<Document, DocumentBuildError> {
		fn require<T>(value: Option<T>, field: &'static str) -> Result<T, DocumentBuildError> {
			value.ok_or(DocumentBuildError::MissingField { field })
		}

		Ok(Document {
			description: self.description,
			id: require(self.id, "doc_id")?,
			status: require(self.status, "doc_status")?,
			doc_type: require(self.doc_type, "doc_type")?,
			owner_inn: require(self.owner_inn, "owner_inn")?,
			participant_inn: require(self.participant_inn, "participant_inn")?,
			producer_inn: require(self.producer_inn, "producer_inn")?,
			production_date: require(self.production_date, "production_date")?,
			production_type: require(self.production_type, "production_type")?,
			products: self.products,
			reg_date: require(self.reg_date, "reg_date")?,
			reg_number: self.reg_number,
		})
	}
}

/// Single line item inside a [`Document`].
///
/// Every field is optional on the wire; absent values are omitted from the JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
	/// Kind of conformity document.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub certificate_document: Option<String>,
	/// Conformity document date.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "iso_date::option")]
	pub certificate_document_date: Option<Date>,
	/// Conformity document number.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub certificate_document_number: Option<String>,
	/// Owner taxpayer number.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub owner_inn: Option<String>,
	/// Producer taxpayer number.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub producer_inn: Option<String>,
	/// Production date.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "iso_date::option")]
	pub production_date: Option<Date>,
	/// Commodity nomenclature code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tnved_code: Option<String>,
	/// Unit identification code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uit_code: Option<String>,
	/// Group package identification code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub uitu_code: Option<String>,
}
impl Product {
	/// Returns a builder for a line item.
	pub fn builder() -> ProductBuilder {
		ProductBuilder::default()
	}
}

/// Builder for [`Product`].
#[derive(Clone, Debug, Default)]
pub struct ProductBuilder(Product);
impl ProductBuilder {
	/// Sets the conformity document kind.
	pub fn certificate_document(mut self, value: impl Into<String>) -> Self {
		self.0.certificate_document = Some(value.into());

		self
	}

	/// Sets the conformity document date.
	pub fn certificate_document_date(mut self, date: Date) -> Self {
		self.0.certificate_document_date = Some(date);

		self
	}

	/// Sets the conformity document number.
	pub fn certificate_document_number(mut self, value: impl Into<String>) -> Self {
		self.0.certificate_document_number = Some(value.into());

		self
	}

	/// Sets the owner taxpayer number.
	pub fn owner_inn(mut self, inn: impl Into<String>) -> Self {
		self.0.owner_inn = Some(inn.into());

		self
	}

	/// Sets the producer taxpayer number.
	pub fn producer_inn(mut self, inn: impl Into<String>) -> Self {
		self.0.producer_inn = Some(inn.into());

		self
	}

	/// Sets the production date.
	pub fn production_date(mut self, date: Date) -> Self {
		self.0.production_date = Some(date);

		self
	}

	/// Sets the commodity nomenclature code.
	pub fn tnved_code(mut self, code: impl Into<String>) -> Self {
		self.0.tnved_code = Some(code.into());

		self
	}

	/// Sets the unit identification code.
	pub fn uit_code(mut self, code: impl Into<String>) -> Self {
		self.0.uit_code = Some(code.into());

		self
	}

	/// Sets the group package identification code.
	pub fn uitu_code(mut self, code: impl Into<String>) -> Self {
		self.0.uitu_code = Some(code.into());

		self
	}

	/// Finishes the line item.
	pub fn build(self) -> Product {
		self.0
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::{Value, json};
	use time::macros;
	// self
	use super::*;

	fn minimal_builder() -> DocumentBuilder {
		Document::builder()
			.id("doc-1")
			.status("DRAFT")
			.doc_type("LP_INTRODUCE_GOODS")
			.owner_inn("1")
			.participant_inn("2")
			.producer_inn("3")
			.production_date(macros::date!(2024-03-01))
			.production_type(ProductionType::ContractProduction)
			.reg_date(macros::date!(2024-03-02))
	}

	#[test]
	fn builder_reports_first_missing_field() {
		let err = Document::builder()
			.id("doc-1")
			.build()
			.expect_err("Builder should reject documents without a status.");

		assert_eq!(err, DocumentBuildError::MissingField { field: "doc_status" });
	}

	#[test]
	fn document_uses_registry_field_names() {
		let document = minimal_builder()
			.description(DocumentDescription::new("2"))
			.reg_number("R-1")
			.product(
				Product::builder()
					.tnved_code("6109")
					.uitu_code("00046")
					.certificate_document_date(macros::date!(2023-12-31))
					.build(),
			)
			.build()
			.expect("Document builder should succeed with every mandatory field.");
		let value = serde_json::to_value(&document).expect("Document should serialize.");

		assert_eq!(
			value,
			json!({
				"description": { "participantInn": "2" },
				"doc_id": "doc-1",
				"doc_status": "DRAFT",
				"doc_type": "LP_INTRODUCE_GOODS",
				"owner_inn": "1",
				"participant_inn": "2",
				"producer_inn": "3",
				"production_date": "2024-03-01",
				"production_type": "CONTRACT_PRODUCTION",
				"products": [{
					"certificate_document_date": "2023-12-31",
					"tnved_code": "6109",
					"uitu_code": "00046"
				}],
				"reg_date": "2024-03-02",
				"reg_number": "R-1"
			})
		);
	}

	#[test]
	fn optional_fields_are_omitted() {
		let document = minimal_builder().build().expect("Minimal document should build.");
		let value = serde_json::to_value(&document).expect("Document should serialize.");
		let Value::Object(map) = value else { panic!("Document must serialize to an object.") };

		assert!(!map.contains_key("description"));
		assert!(!map.contains_key("reg_number"));
		assert_eq!(map.get("products"), Some(&json!([])));
	}

	#[test]
	fn dates_parse_from_iso_strings() {
		let product: Product =
			serde_json::from_str("{\"production_date\":\"2024-05-06\",\"uit_code\":\"X\"}")
				.expect("Product should deserialize from registry JSON.");

		assert_eq!(product.production_date, Some(macros::date!(2024-05-06)));
		assert_eq!(product.uit_code.as_deref(), Some("X"));
		assert!(
			serde_json::from_str::<Product>("{\"production_date\":\"06.05.2024\"}").is_err(),
			"Non-ISO dates must be rejected."
		);
	}
}
