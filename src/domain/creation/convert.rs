//! Conversions from wire types to domain types for creations.

use super::wire::CollectionRef;
use crate::domain::collection::Collection;

impl From<CollectionRef> for Collection {
    fn from(r: CollectionRef) -> Self {
        Collection::new(r.collection_id)
    }
}
