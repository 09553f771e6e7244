//! Creations sub-client — list, fetch, react, related resources.

use crate::client::{require_id, EdenClient};
use crate::domain::collection::Collection;
use crate::domain::creation::wire::{ReactRequest, ReactionsRequest};
use crate::domain::creation::{Creation, Reaction};
use crate::error::SdkError;

/// Sub-client for creation operations.
pub struct Creations<'a> {
    pub(crate) client: &'a EdenClient,
}

impl<'a> Creations<'a> {
    /// List creations matching a filter. Pass `serde_json::json!({})` for all.
    pub async fn list(&self, filter: &impl serde::Serialize) -> Result<Vec<Creation>, SdkError> {
        let resp = self.client.http.get_creations(filter).await?;
        Ok(resp.creations)
    }

    /// Get a single creation by id.
    pub async fn get(&self, creation_id: &str) -> Result<Creation, SdkError> {
        require_id("creation id", creation_id)?;
        let resp = self.client.http.get_creation(creation_id).await?;
        Ok(resp.creation)
    }

    /// Attach a reaction to a creation. Returns the server's ack as-is.
    pub async fn react(
        &self,
        creation_id: &str,
        reaction: &str,
    ) -> Result<serde_json::Value, SdkError> {
        self.send_reaction(creation_id, reaction, false).await
    }

    /// Remove a previously attached reaction.
    pub async fn unreact(
        &self,
        creation_id: &str,
        reaction: &str,
    ) -> Result<serde_json::Value, SdkError> {
        self.send_reaction(creation_id, reaction, true).await
    }

    /// Creations derived from this one.
    pub async fn recreations(&self, creation_id: &str) -> Result<Vec<Creation>, SdkError> {
        require_id("creation id", creation_id)?;
        Ok(self.client.http.get_recreations(creation_id).await?)
    }

    /// Collections this creation belongs to.
    pub async fn collections(&self, creation_id: &str) -> Result<Vec<Collection>, SdkError> {
        require_id("creation id", creation_id)?;
        let resp = self.client.http.get_creation_collections(creation_id).await?;
        Ok(resp.collections.into_iter().map(Collection::from).collect())
    }

    /// Reactions on this creation, optionally filtered by reaction kind.
    pub async fn reactions(
        &self,
        creation_id: &str,
        reactions: Option<&[&str]>,
    ) -> Result<Vec<Reaction>, SdkError> {
        require_id("creation id", creation_id)?;
        let filter = ReactionsRequest {
            reactions: reactions.map(|r| r.iter().map(|s| s.to_string()).collect()),
        };
        let resp = self
            .client
            .http
            .get_creation_reactions(creation_id, &filter)
            .await?;
        Ok(resp.reactions)
    }

    async fn send_reaction(
        &self,
        creation_id: &str,
        reaction: &str,
        unreact: bool,
    ) -> Result<serde_json::Value, SdkError> {
        require_id("creation id", creation_id)?;
        let body = ReactRequest {
            reaction: reaction.to_string(),
            unreact,
        };
        Ok(self.client.http.react(creation_id, &body).await?)
    }
}
