// src/properties/relation.rs
//! Resolution of a title fragment to exactly one record in another database.

use crate::api::NotionRepository;
use crate::error::RelationError;
use crate::types::{DatabaseId, PageId};

/// Something that can turn a title fragment into the ID of one record.
///
/// The contract is "prefix filter, then count": exactly one match succeeds,
/// zero and many are distinct errors. Ambiguity is surfaced, never resolved
/// by picking a record arbitrarily.
pub trait RelationResolver {
    fn resolve(&self, database: &DatabaseId, fragment: &str) -> Result<PageId, RelationError>;
}

/// Resolver backed by the live query endpoint.
pub struct QueryRelationResolver<'a> {
    repo: &'a dyn NotionRepository,
}

impl<'a> QueryRelationResolver<'a> {
    pub fn new(repo: &'a dyn NotionRepository) -> Self {
        Self { repo }
    }
}

impl RelationResolver for QueryRelationResolver<'_> {
    fn resolve(&self, database: &DatabaseId, fragment: &str) -> Result<PageId, RelationError> {
        let mut matches = self
            .repo
            .query_by_title_prefix(database, fragment)
            .map_err(|err| RelationError::Query(err.to_string()))?;

        log::debug!(
            "relation lookup '{}' in {}: {} match(es)",
            fragment,
            database,
            matches.len()
        );

        match matches.len() {
            0 => Err(RelationError::NotFound {
                fragment: fragment.to_string(),
            }),
            1 => Ok(matches.swap_remove(0).id),
            count => Err(RelationError::AmbiguousReference {
                fragment: fragment.to_string(),
                count,
            }),
        }
    }
}
