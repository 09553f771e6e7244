//! Creation domain — generated artifacts returned by the service.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{CreationId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A server-side generated artifact.
///
/// Known fields are typed explicitly; anything else the backend attaches
/// lands in `extra`, so new server fields never break deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creation {
    #[serde(rename = "_id")]
    pub id: CreationId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Creation {
    /// Base route for creation endpoints, derived from the id.
    pub fn base_route(&self) -> String {
        format!("/creation/{}", self.id)
    }
}

/// A reaction attached to a creation (e.g. `"praise"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    pub reaction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_route_derived_from_id() {
        let creation = Creation {
            id: CreationId::from("62f5a3e9"),
            user: None,
            task: None,
            name: None,
            uri: None,
            created_at: None,
            updated_at: None,
            extra: HashMap::new(),
        };
        assert_eq!(creation.base_route(), "/creation/62f5a3e9");
    }

    #[test]
    fn test_unknown_fields_land_in_extra() {
        let json = r#"{
            "_id": "abc123",
            "uri": "https://cdn.eden.art/abc123.png",
            "praiseCount": 4,
            "attributes": {"seed": 1234}
        }"#;
        let creation: Creation = serde_json::from_str(json).unwrap();
        assert_eq!(creation.id.as_str(), "abc123");
        assert_eq!(creation.uri.as_deref(), Some("https://cdn.eden.art/abc123.png"));
        assert_eq!(creation.extra["praiseCount"], 4);
        assert_eq!(creation.extra["attributes"]["seed"], 1234);
    }
}
