//! Wire types for creation endpoints.

use super::{Creation, Reaction};
use serde::{Deserialize, Serialize};

/// Response envelope for `POST /creations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreationsResponse {
    pub creations: Vec<Creation>,
}

/// Response envelope for `GET /creation/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreationResponse {
    pub creation: Creation,
}

/// Request body for `POST /creation/{id}/react`.
///
/// React and unreact share the endpoint; only the `unreact` flag differs.
#[derive(Debug, Clone, Serialize)]
pub struct ReactRequest {
    pub reaction: String,
    pub unreact: bool,
}

/// Response envelope for `GET /creation/{id}/collections`.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionsResponse {
    pub collections: Vec<CollectionRef>,
}

/// A collection reference as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRef {
    pub collection_id: String,
}

/// Request body for `POST /creation/{id}/reactions`.
///
/// An empty filter (`reactions: None`) serializes to `{}` and returns all
/// reactions on the creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReactionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<String>>,
}

/// Response envelope for `POST /creation/{id}/reactions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionsResponse {
    pub reactions: Vec<Reaction>,
}
