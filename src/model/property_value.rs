// src/model/property_value.rs
//! Typed property values ready for submission.
//!
//! Exactly one variant per supported remote type. The variant tag always
//! matches the schema descriptor the value was coerced against.

use crate::types::PageId;
use chrono::{DateTime, FixedOffset};
use serde_json::{json, Value};

/// A coerced, correctly-shaped property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(String),
    Text(String),
    Number(i64),
    Select(String),
    MultiSelect(Vec<String>),
    Date(DateTime<FixedOffset>),
    Checkbox(bool),
    Url(String),
    Email(String),
    PhoneNumber(String),
    Relation(Vec<PageId>),
}

impl PropertyValue {
    /// Get the property type as a string
    pub fn property_type(&self) -> &'static str {
        match self {
            PropertyValue::Title(_) => "title",
            PropertyValue::Text(_) => "rich_text",
            PropertyValue::Number(_) => "number",
            PropertyValue::Select(_) => "select",
            PropertyValue::MultiSelect(_) => "multi_select",
            PropertyValue::Date(_) => "date",
            PropertyValue::Checkbox(_) => "checkbox",
            PropertyValue::Url(_) => "url",
            PropertyValue::Email(_) => "email",
            PropertyValue::PhoneNumber(_) => "phone_number",
            PropertyValue::Relation(_) => "relation",
        }
    }

    /// Serialize into the wire shape the pages endpoint expects.
    ///
    /// Text-bearing variants become a single unstyled run; choice variants
    /// reference their option by name and let the service fill in the rest.
    pub fn to_wire(&self) -> Value {
        match self {
            PropertyValue::Title(text) => json!({
                "title": [{ "text": { "content": text } }]
            }),
            PropertyValue::Text(text) => json!({
                "rich_text": [{ "text": { "content": text } }]
            }),
            PropertyValue::Number(n) => json!({ "number": n }),
            PropertyValue::Select(name) => json!({ "select": { "name": name } }),
            PropertyValue::MultiSelect(names) => json!({
                "multi_select": names.iter().map(|n| json!({ "name": n })).collect::<Vec<_>>()
            }),
            PropertyValue::Date(start) => json!({
                "date": { "start": start.to_rfc3339() }
            }),
            PropertyValue::Checkbox(b) => json!({ "checkbox": b }),
            PropertyValue::Url(s) => json!({ "url": s }),
            PropertyValue::Email(s) => json!({ "email": s }),
            PropertyValue::PhoneNumber(s) => json!({ "phone_number": s }),
            PropertyValue::Relation(ids) => json!({
                "relation": ids
                    .iter()
                    .map(|id| json!({ "id": id.to_hyphenated() }))
                    .collect::<Vec<_>>()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_types() {
        let title = PropertyValue::Title("Groceries".to_string());
        assert_eq!(title.property_type(), "title");

        let number = PropertyValue::Number(42);
        assert_eq!(number.property_type(), "number");
    }

    #[test]
    fn wire_shapes() {
        assert_eq!(
            PropertyValue::Select("Todo".to_string()).to_wire(),
            json!({ "select": { "name": "Todo" } })
        );
        assert_eq!(
            PropertyValue::MultiSelect(vec!["Todo".to_string()]).to_wire(),
            json!({ "multi_select": [{ "name": "Todo" }] })
        );
        assert_eq!(
            PropertyValue::Text("hello".to_string()).to_wire(),
            json!({ "rich_text": [{ "text": { "content": "hello" } }] })
        );
        assert_eq!(
            PropertyValue::Checkbox(true).to_wire(),
            json!({ "checkbox": true })
        );
    }

    #[test]
    fn relation_wire_uses_hyphenated_ids() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(
            PropertyValue::Relation(vec![id]).to_wire(),
            json!({ "relation": [{ "id": "550e8400-e29b-41d4-a716-446655440000" }] })
        );
    }
}
