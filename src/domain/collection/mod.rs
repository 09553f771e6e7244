//! Collection domain — named groupings of creations.
//!
//! Collections are managed by a separate service surface; this SDK only ever
//! sees them as id references attached to a creation.

use serde::{Deserialize, Serialize};

/// A reference to a collection, by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
}

impl Collection {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Base route for collection endpoints.
    pub fn base_route(&self) -> String {
        format!("/collection/{}", self.id)
    }
}
