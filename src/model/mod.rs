mod block;
mod schema;
mod property_value;

pub use block::{Block, BlockCommon, TextBlockContent, UnsupportedBlock};
pub use property_value::PropertyValue;
pub use schema::{PropertyKind, Schema, SelectOption};

use crate::types::{PageId, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Free-form user input: property names mapped to single string values.
///
/// No type information is carried; values are matched against a [`Schema`]
/// before use. Insertion order is preserved so failures are deterministic.
pub type RawFields = IndexMap<String, String>;

/// The output of a successful coercion: only properties present in both
/// the raw fields and the schema, each with its typed value.
pub type CoercionResult = IndexMap<PropertyName, PropertyValue>;

/// A lightweight reference to one record in a database: enough to link to
/// it, list it, or print it after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: PageId,
    pub title: String,
    pub url: String,
}
