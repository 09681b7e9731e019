//! # List Collections
//!
//! Stripe's paginated collection envelope and the common parameters
//! accepted by list endpoints.

use crate::created::CreatedInput;
use serde::{Deserialize, Serialize};

/// A page of results returned by a list endpoint.
///
/// Stripe wraps every collection in the same envelope: an `object` tag of
/// `"list"`, the page of `data`, a `has_more` flag, and the URL the page was
/// fetched from. Cursoring to the next page is done by passing the last
/// item's id as `starting_after` on a fresh call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List<T> {
    pub object: String,

    pub data: Vec<T>,

    pub has_more: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T> List<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

/// Common parameters for list endpoints
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Page size (Stripe accepts 1..=100)
    pub limit: Option<u32>,

    /// Cursor: return items after this object id
    pub starting_after: Option<String>,

    /// Cursor: return items before this object id
    pub ending_before: Option<String>,

    /// Creation-time filter
    pub created: Option<CreatedInput>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: set the forward cursor
    pub fn with_starting_after(mut self, id: impl Into<String>) -> Self {
        self.starting_after = Some(id.into());
        self
    }

    /// Builder: set the backward cursor
    pub fn with_ending_before(mut self, id: impl Into<String>) -> Self {
        self.ending_before = Some(id.into());
        self
    }

    /// Builder: set the creation-time filter
    pub fn with_created(mut self, created: impl Into<CreatedInput>) -> Self {
        self.created = Some(created.into());
        self
    }

    /// Render as query parameters in Stripe's bracket syntax
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(ref id) = self.starting_after {
            params.push(("starting_after".to_string(), id.clone()));
        }
        if let Some(ref id) = self.ending_before {
            params.push(("ending_before".to_string(), id.clone()));
        }
        if let Some(ref created) = self.created {
            params.extend(created.to_query_params("created"));
        }

        params
    }
}
