//! Notion API access: the repository seam, the HTTP client behind it, and
//! the response parsers.

pub mod client;
pub mod parser;

pub use client::NotionHttpClient;

use crate::error::AppError;
use crate::model::{Block, CoercionResult, PageRef, Schema};
use crate::types::{BlockId, DatabaseId};

/// The read/write operations the rest of the tool needs from Notion.
///
/// Everything above this trait is a pure transformation; everything below it
/// is transport. Tests substitute an in-memory implementation.
pub trait NotionRepository {
    /// Fetch the live schema of a database. Never cached.
    fn fetch_schema(&self, database: &DatabaseId) -> Result<Schema, AppError>;

    /// Fetch one page of a database's rows.
    fn query_rows(&self, database: &DatabaseId) -> Result<Vec<PageRef>, AppError>;

    /// Fetch the rows whose title starts with `fragment`. Only the count and
    /// identifiers matter to callers; ordering is not significant.
    fn query_by_title_prefix(
        &self,
        database: &DatabaseId,
        fragment: &str,
    ) -> Result<Vec<PageRef>, AppError>;

    /// Fetch a block tree with children fully populated.
    fn fetch_block_tree(&self, parent: &BlockId) -> Result<Vec<Block>, AppError>;

    /// Create a record with the given coerced properties.
    fn create_page(
        &self,
        database: &DatabaseId,
        properties: &CoercionResult,
    ) -> Result<PageRef, AppError>;
}
