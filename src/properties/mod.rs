//! Schema-driven coercion of free-form fields into typed property values.

mod coerce;
mod relation;

pub use coerce::coerce_fields;
pub use relation::{QueryRelationResolver, RelationResolver};
