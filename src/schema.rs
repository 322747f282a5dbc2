//! Wire schema for create-document requests: the document body, its line items, request tags,
//! and the product group catalog.
//!
//! Field names follow the registry's JSON contract exactly; dates are ISO `YYYY-MM-DD` strings.

pub mod document;
pub mod product_group;
pub mod request;

pub use document::*;
pub use product_group::*;
pub use request::*;
