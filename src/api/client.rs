use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, Url};

use crate::api::error::ApiError;
use crate::api::types::{decode_post_list, NewPost, Post, PostId, PostUpdate, StatusPatch};
use crate::config::ApiConfig;

/// HTTP client for the posts collection.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct PostsClient {
    client: Client,
    base: Url,
}

impl PostsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = parse_base_url(&config.base_url)?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("post-console/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `GET /api`
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.base.clone();
        let response = self.send(self.client.get(url.clone()), &url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        decode_post_list(&bytes)
    }

    /// `POST /api`
    pub async fn create_post(&self, post: &NewPost) -> Result<(), ApiError> {
        let url = self.base.clone();
        self.send(self.client.post(url.clone()).json(post), &url)
            .await
            .map(drop)
    }

    /// `PUT /api/{id}` with the full draft.
    pub async fn update_post(&self, id: &PostId, update: &PostUpdate) -> Result<(), ApiError> {
        let url = self.item_url(id);
        self.send(self.client.put(url.clone()).json(update), &url)
            .await
            .map(drop)
    }

    /// `PUT /api/{id}` with `{"status": "PUBLISHED"}` only.
    pub async fn publish_post(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        self.send(
            self.client.put(url.clone()).json(&StatusPatch::published()),
            &url,
        )
        .await
        .map(drop)
    }

    /// `DELETE /api/{id}`
    pub async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        self.send(self.client.delete(url.clone()), &url)
            .await
            .map(drop)
    }

    pub fn item_url(&self, id: &PostId) -> Url {
        let mut url = self.base.clone();
        // http(s) URLs always have a path to extend.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id.as_str());
        }
        url
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

/// Parse and check the configured base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}
