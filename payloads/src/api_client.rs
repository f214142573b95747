use crate::{
    ContentId, ContentRecord, DraftId, ListingId, ListingSubmission, requests,
    responses,
};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    pub fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.address.trim_end_matches('/'))
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Every homepage content record.
    pub async fn list_content(
        &self,
    ) -> Result<Vec<ContentRecord>, ClientError> {
        let response = self.empty_get("content").await?;
        ok_body(response).await
    }

    /// Create or update a content record, returning the stored version.
    pub async fn upsert_content(
        &self,
        details: &requests::UpsertContent,
    ) -> Result<ContentRecord, ClientError> {
        let response = self.post("content", details).await?;
        ok_body(response).await
    }

    pub async fn delete_content(
        &self,
        content_id: &ContentId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_content", content_id).await?;
        ok_empty(response).await
    }

    pub async fn save_draft(
        &self,
        details: &requests::SaveDraft,
    ) -> Result<DraftId, ClientError> {
        let response = self.post("save_draft", details).await?;
        ok_body(response).await
    }

    pub async fn get_draft(
        &self,
        draft_id: &DraftId,
    ) -> Result<responses::Draft, ClientError> {
        let response = self.post("get_draft", draft_id).await?;
        ok_body(response).await
    }

    pub async fn delete_draft(
        &self,
        draft_id: &DraftId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_draft", draft_id).await?;
        ok_empty(response).await
    }

    /// Upload one photo and get back the url to store in the gallery.
    pub async fn upload_image(
        &self,
        details: &requests::UploadImage,
    ) -> Result<responses::UploadedImage, ClientError> {
        let response = self.post("upload_image", details).await?;
        ok_body(response).await
    }

    pub async fn submit_listing(
        &self,
        details: &ListingSubmission,
    ) -> Result<ListingId, ClientError> {
        let response = self.post("submit_listing", details).await?;
        ok_body(response).await
    }

    /// Request the confirmation email for a submitted listing.
    pub async fn notify_owner(
        &self,
        details: &requests::NotifyOwner,
    ) -> Result<(), ClientError> {
        let response = self.post("notify_owner", details).await?;
        ok_empty(response).await
    }

    pub async fn place_suggestions(
        &self,
        details: &requests::PlaceQuery,
    ) -> Result<Vec<responses::PlaceSuggestion>, ClientError> {
        let response = self.post("place_suggestions", details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
