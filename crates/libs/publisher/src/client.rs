use crate::error::{PublishError, PublishResult};
use crate::interfaces::{CreatePost, UploadDestination};
use crate::progress::UploadProgress;
use app_state::AppSettings;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::path::Path;
use tracing::info;

/// Header carrying the static API credential on every call.
pub const TOKEN_HEADER: &str = "Flic-Token";

/// Client for the remote publishing API.
///
/// All three remote operations go through here; the credential and category
/// come from the settings at construction time. The remote contract treats
/// exactly HTTP 200 as success.
#[derive(Clone)]
pub struct PublishClient {
    http: Client,
    base_url: String,
    token: String,
    category_id: i64,
}

impl PublishClient {
    #[must_use]
    pub fn new(http: Client, settings: &AppSettings) -> Self {
        Self {
            http,
            base_url: settings.publish.base_url.clone(),
            token: settings.secrets.api_token.clone(),
            category_id: settings.publish.category_id,
        }
    }

    /// Asks the API for a fresh upload destination.
    pub async fn request_upload_destination(&self) -> PublishResult<UploadDestination> {
        let url = format!("{}/posts/generate-upload-url", self.base_url);
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(api_error(response).await);
        }

        let body = response.text().await?;
        let destination: UploadDestination = serde_json::from_str(&body)?;
        Ok(destination)
    }

    /// Reads the whole file into memory and PUTs the raw bytes to the
    /// destination URL.
    ///
    /// The transfer runs on its own connection, separate from the client used
    /// for the other two calls. Progress advances in one jump once the read
    /// completes. The content-type header is meaningless for a raw-byte PUT
    /// but the API receives it on every call.
    pub async fn transfer_bytes(
        &self,
        path: &Path,
        destination_url: &str,
        progress: &mut UploadProgress,
    ) -> PublishResult<()> {
        let data = tokio::fs::read(path).await?;
        progress.advance(data.len() as u64);

        let response = Client::new()
            .put(destination_url)
            .header(TOKEN_HEADER, &self.token)
            .header(CONTENT_TYPE, "application/json")
            .body(data)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(api_error(response).await);
        }

        info!("Video uploaded to destination.");
        Ok(())
    }

    /// Creates the public post referencing an uploaded video.
    ///
    /// Returns the raw response body so the caller can log what the API
    /// answered.
    pub async fn create_post(&self, title: &str, hash: &str) -> PublishResult<String> {
        let url = format!("{}/posts", self.base_url);
        let body = CreatePost {
            title: title.to_owned(),
            hash: hash.to_owned(),
            is_available_in_public_feed: true,
            category_id: self.category_id,
        };

        let response = self
            .http
            .post(url)
            .header(TOKEN_HEADER, &self.token)
            .json(&body)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(api_error(response).await);
        }

        let response_body = response.text().await?;
        Ok(response_body)
    }
}

async fn api_error(response: reqwest::Response) -> PublishError {
    PublishError::Api {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    }
}
