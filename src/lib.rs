// src/lib.rs
//! notion-jot library — manage notion.so database records and dump pages as markdown.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `CoercionError`, `RelationError`
//! - **Configuration** — `CommandLineInput`, `Registry`
//! - **Domain model** — `Schema`, `PropertyKind`, `PropertyValue`, `Block`, `PageRef`
//! - **Domain types** — `PageId`, `BlockId`, `DatabaseId`, `ApiKey`, `RichTextItem`
//! - **API client** — `NotionRepository`, `NotionHttpClient`, parsers
//! - **Coercion** — `coerce_fields`, `RelationResolver`
//! - **Formatting** — `render_blocks`, `IndentWriter`

pub mod api;
pub mod config;
pub mod error;
pub mod formatting;
pub mod model;
pub mod properties;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, CoercionError, NotionErrorCode, RelationError};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, Registry};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, CoercionResult, PageRef, PropertyKind, PropertyValue, RawFields, Schema,
    SelectOption, TextBlockContent, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, DatabaseId, PageId, PropertyName, RichTextItem,
};

// --- API Client ---
pub use crate::api::{NotionHttpClient, NotionRepository};

// --- Coercion ---
pub use crate::properties::{coerce_fields, QueryRelationResolver, RelationResolver};

// --- Formatting ---
pub use crate::formatting::{render_blocks, IndentWriter};
