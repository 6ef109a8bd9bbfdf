// src/model/schema.rs
//! Database schema — the remote service's declaration of each property's type.
//!
//! Fetched fresh per coercion call; never cached. The descriptor in hand must
//! be the one the remote service will validate the submission against.

use crate::types::{DatabaseId, PropertyName};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One valid choice for a select or multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: Option<String>,
    pub name: String,
}

impl SelectOption {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A property's declared type, with choice types carrying their option sets.
///
/// Computed types (formula, rollup) and types this tool does not write
/// (people, files) have their own variants so refusal is explicit rather
/// than a silent drop. Anything the remote service adds later lands in
/// `Unknown` and is treated as not settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyKind {
    Title,
    Text,
    Number,
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Date,
    Checkbox,
    Url,
    Email,
    PhoneNumber,
    Relation { database_id: DatabaseId },
    Formula,
    Rollup,
    People,
    Files,
    Unknown(String),
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKind::Title => write!(f, "title"),
            PropertyKind::Text => write!(f, "rich_text"),
            PropertyKind::Number => write!(f, "number"),
            PropertyKind::Select { .. } => write!(f, "select"),
            PropertyKind::MultiSelect { .. } => write!(f, "multi_select"),
            PropertyKind::Date => write!(f, "date"),
            PropertyKind::Checkbox => write!(f, "checkbox"),
            PropertyKind::Url => write!(f, "url"),
            PropertyKind::Email => write!(f, "email"),
            PropertyKind::PhoneNumber => write!(f, "phone_number"),
            PropertyKind::Relation { .. } => write!(f, "relation"),
            PropertyKind::Formula => write!(f, "formula"),
            PropertyKind::Rollup => write!(f, "rollup"),
            PropertyKind::People => write!(f, "people"),
            PropertyKind::Files => write!(f, "files"),
            PropertyKind::Unknown(tag) => write!(f, "{}", tag),
        }
    }
}

/// Mapping from property name to its declared type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    properties: IndexMap<PropertyName, PropertyKind>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<PropertyName>, kind: PropertyKind) {
        self.properties.insert(name.into(), kind);
    }

    pub fn get(&self, name: &str) -> Option<&PropertyKind> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyName, &PropertyKind)> {
        self.properties.iter()
    }

    /// The name of the title property, if the schema declares one.
    ///
    /// Every Notion database has exactly one; a malformed response may not.
    pub fn title_property_name(&self) -> Option<&PropertyName> {
        self.properties
            .iter()
            .find(|(_, kind)| matches!(kind, PropertyKind::Title))
            .map(|(name, _)| name)
    }
}
