// src/infrastructure/notehub.rs
use crate::application::NoteRepository;
use crate::domain::{CreateNotePayload, DomainError, Note, NotesPage, NotesQuery};
use crate::infrastructure::config::ApiConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// HTTP repository for the remote NoteHub service.
pub struct NoteHubRepository {
    client: Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl NoteHubRepository {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        debug!(%base_url, "Creating new NoteHubRepository");

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        self.authorize(request)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))
    }

    /// Map a non-2xx response to a domain error, preferring the service's
    /// own message body when it carries one.
    async fn error_from_response(response: Response) -> DomainError {
        let status = response.status().as_u16();
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => "No error details provided".to_string(),
        };
        DomainError::Api { status, message }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, DomainError> {
        response
            .json()
            .await
            .map_err(|e| DomainError::Network(format!("Failed to parse response: {e}")))
    }
}

#[async_trait]
impl NoteRepository for NoteHubRepository {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self, query: &NotesQuery) -> Result<NotesPage, DomainError> {
        let mut request = self.client.get(self.url("/notes")).query(&[
            ("page", query.page.to_string()),
            ("perPage", query.per_page.to_string()),
        ]);
        if !query.search.is_empty() {
            request = request.query(&[("search", query.search.as_str())]);
        }
        if let Some(tag) = &query.tag {
            request = request.query(&[("tag", tag.as_str())]);
        }

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let page: NotesPage = Self::decode(response).await?;
        debug!(
            notes = page.notes.len(),
            total_pages = page.total_pages,
            "Fetched notes page"
        );
        Ok(page)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_note(&self, id: i64) -> Result<Note, DomainError> {
        let request = self.client.get(self.url(&format!("/notes/{id}")));

        let response = self.send(request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DomainError::NoteNotFound(id));
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        Self::decode(response).await
    }

    #[instrument(level = "debug", skip(self, payload), fields(title = %payload.title))]
    async fn create_note(&self, payload: &CreateNotePayload) -> Result<Note, DomainError> {
        let request = self.client.post(self.url("/notes")).json(payload);

        let response = self.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let note: Note = Self::decode(response).await?;
        info!(note_id = note.id, "Created note");
        Ok(note)
    }
}
