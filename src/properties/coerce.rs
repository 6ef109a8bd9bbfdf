// src/properties/coerce.rs
//! Coercion of free-form string fields against a live database schema.
//!
//! Each field is dispatched on its schema-declared type and either wrapped
//! into the matching [`PropertyValue`] variant or rejected with an error
//! naming the field. Field names the schema does not declare are skipped so
//! callers can pass superset field sets without pruning.

use crate::error::CoercionError;
use crate::model::{CoercionResult, PropertyKind, PropertyValue, RawFields, Schema, SelectOption};
use crate::properties::RelationResolver;
use crate::types::PropertyName;
use chrono::DateTime;
use indexmap::IndexMap;

/// Coerce every known field in `fields` against `schema`.
///
/// The first field-level failure aborts the whole call; no partial result is
/// returned. Relation fields are the only ones that touch the network, via
/// `resolver`.
pub fn coerce_fields(
    schema: &Schema,
    fields: &RawFields,
    resolver: &dyn RelationResolver,
) -> Result<CoercionResult, CoercionError> {
    let mut coerced: CoercionResult = IndexMap::new();

    for (name, value) in fields {
        let Some(kind) = schema.get(name) else {
            log::debug!("skipping field '{}': not declared by the schema", name);
            continue;
        };

        let property = coerce_one(name, kind, value, resolver)?;
        coerced.insert(PropertyName::from(name.as_str()), property);
    }

    Ok(coerced)
}

fn coerce_one(
    field: &str,
    kind: &PropertyKind,
    value: &str,
    resolver: &dyn RelationResolver,
) -> Result<PropertyValue, CoercionError> {
    match kind {
        PropertyKind::Title => Ok(PropertyValue::Title(value.to_string())),
        PropertyKind::Text => Ok(PropertyValue::Text(value.to_string())),

        PropertyKind::Number => {
            // Integral literals only; the remote type also accepts floats
            // but this tool does not produce them.
            value
                .parse::<i64>()
                .map(PropertyValue::Number)
                .map_err(|_| CoercionError::InvalidNumber {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        }

        PropertyKind::Select { options } => {
            find_option(options, value)
                .map(PropertyValue::Select)
                .ok_or_else(|| CoercionError::OptionNotFound {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        }

        PropertyKind::MultiSelect { options } => {
            // Single option per invocation; comma-separated input is not
            // split (known limitation, kept for caller compatibility).
            find_option(options, value)
                .map(|name| PropertyValue::MultiSelect(vec![name]))
                .ok_or_else(|| CoercionError::OptionNotFound {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        }

        PropertyKind::Date => DateTime::parse_from_rfc3339(value)
            .map(PropertyValue::Date)
            .map_err(|_| CoercionError::InvalidDate {
                field: field.to_string(),
                value: value.to_string(),
            }),

        PropertyKind::Checkbox => {
            // str::parse::<bool> accepts exactly "true" and "false".
            value
                .parse::<bool>()
                .map(PropertyValue::Checkbox)
                .map_err(|_| CoercionError::InvalidBoolean {
                    field: field.to_string(),
                    value: value.to_string(),
                })
        }

        PropertyKind::Url => Ok(PropertyValue::Url(value.to_string())),
        PropertyKind::Email => Ok(PropertyValue::Email(value.to_string())),
        PropertyKind::PhoneNumber => Ok(PropertyValue::PhoneNumber(value.to_string())),

        PropertyKind::Relation { database_id } => resolver
            .resolve(database_id, value)
            .map(|id| PropertyValue::Relation(vec![id]))
            .map_err(|source| CoercionError::Relation {
                field: field.to_string(),
                source,
            }),

        PropertyKind::Formula
        | PropertyKind::Rollup
        | PropertyKind::People
        | PropertyKind::Files => Err(CoercionError::UnsupportedPropertyType {
            field: field.to_string(),
            property_type: kind.to_string(),
        }),

        PropertyKind::Unknown(_) => Err(CoercionError::ReadOnlyProperty {
            field: field.to_string(),
        }),
    }
}

/// Exact, case-sensitive lookup in declared order; first match wins.
fn find_option(options: &[SelectOption], value: &str) -> Option<String> {
    options
        .iter()
        .find(|option| option.name == value)
        .map(|option| option.name.clone())
}
