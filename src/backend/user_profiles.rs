use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::backend::participant::Participant;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),

    #[error("Failed to decode profile: {0}")]
    Decode(reqwest::Error),
}

/// Source of recruitment profiles. Handed to the modal as `Rc<dyn ProfileFetcher>`.
#[async_trait(?Send)]
pub trait ProfileFetcher {
    async fn fetch_profile(&self, profile_id: &str, id_token: &str) -> Result<Participant, FetchError>;
}

/// HTTP client for the user profiles API.
#[derive(Clone)]
pub struct UserProfilesService {
    client: reqwest::Client,
    base_url: String,
}

impl UserProfilesService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `{base}/user-profiles/recruitment/{profile_id}`, with the id percent-encoded.
    pub fn recruitment_url(&self, profile_id: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| FetchError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["user-profiles", "recruitment", profile_id]);
        Ok(url)
    }
}

#[async_trait(?Send)]
impl ProfileFetcher for UserProfilesService {
    async fn fetch_profile(&self, profile_id: &str, id_token: &str) -> Result<Participant, FetchError> {
        let url = self.recruitment_url(profile_id)?;
        let resp = self.client
            .get(url)
            .bearer_auth(id_token)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        resp.json::<Participant>().await.map_err(FetchError::Decode)
    }
}
