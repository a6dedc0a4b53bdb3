//! HTTP client for a hosted realtime database collection.

use reqwest::{Response, StatusCode};
use serde::Deserialize;

use super::{notes_from_listing, NoteStore};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::{Note, NoteFields, NoteId};

/// Note store backed by a realtime database REST endpoint.
#[derive(Debug, Clone)]
pub struct RealtimeDbStore {
    base_url: String,
    client: reqwest::Client,
}

/// Longest error body kept in [`Error::Status`] and [`Error::NotFound`]
const ERROR_BODY_LIMIT: usize = 180;

/// Body returned by a successful POST
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

impl RealtimeDbStore {
    /// Builds a client from store configuration.
    pub fn new(config: &StoreConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            base_url: config.database_url.clone(),
            client,
        })
    }

    /// Returns the collection URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}.json`
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}.json", self.base_url)
    }

    /// `{base}/{id}.json` with the id percent-encoded
    #[must_use]
    pub fn note_url(&self, id: &NoteId) -> String {
        format!("{}/{}.json", self.base_url, urlencoding::encode(id.as_str()))
    }
}

impl NoteStore for RealtimeDbStore {
    async fn list(&self) -> Result<Vec<Note>> {
        let url = self.collection_url();
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let body = ensure_success(response).await?.text().await?;
        let notes = notes_from_listing(&body)?;
        tracing::debug!("Listed {} notes", notes.len());
        Ok(notes)
    }

    async fn create(&self, fields: &NoteFields) -> Result<Option<NoteId>> {
        let url = self.collection_url();
        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(fields).send().await?;
        // The note is stored once the server answers 2xx, whatever the body says
        let body = ensure_success(response)
            .await?
            .text()
            .await
            .unwrap_or_default();
        let id = serde_json::from_str::<PushResponse>(&body)
            .ok()
            .and_then(|pushed| pushed.name.parse().ok());
        if id.is_none() {
            tracing::warn!("POST {} succeeded without a usable key", url);
        }
        Ok(id)
    }

    async fn update(&self, id: &NoteId, note: &Note) -> Result<()> {
        let url = self.note_url(id);
        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(note).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let url = self.note_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = error_body(&response.text().await.unwrap_or_default());
    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound(body));
    }
    Err(Error::Status {
        status: status.as_u16(),
        body,
    })
}

fn error_body(raw: &str) -> String {
    raw.trim().chars().take(ERROR_BODY_LIMIT).collect()
}
