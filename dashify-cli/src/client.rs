//! HTTP client for the Dashify portal API.

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use dashify_core::date_range::DateRange;
use dashify_core::error::{PortalError, PortalResult};
use dashify_core::event::{EventChanges, EventRecord, NewEvent};
use dashify_core::store::EventStore;

use crate::session::Session;

/// Response envelope used by every portal endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct EventsData {
    events: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
struct EventData {
    event: EventRecord,
}

/// Client for the portal's calendar endpoints.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Decode the envelope, turning API-level failures into store errors.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> PortalResult<T> {
        let status = resp.status();
        let envelope: Envelope<T> = resp
            .json()
            .await
            .map_err(|e| PortalError::Serialization(e.to_string()))?;

        if !status.is_success() || !envelope.success {
            return Err(PortalError::Store(failure_message(&envelope.message, status)));
        }

        envelope
            .data
            .ok_or_else(|| PortalError::Store("response missing data".into()))
    }

    /// Like `decode`, for endpoints whose success payload carries no data.
    async fn check(resp: reqwest::Response) -> PortalResult<()> {
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match resp.json::<Envelope<serde_json::Value>>().await {
            Ok(envelope) => failure_message(&envelope.message, status),
            Err(_) => failure_message("", status),
        };
        Err(PortalError::Store(message))
    }
}

fn failure_message(message: &str, status: reqwest::StatusCode) -> String {
    if message.is_empty() {
        format!("request failed with status {status}")
    } else {
        message.to_string()
    }
}

fn connection_error(err: reqwest::Error) -> PortalError {
    PortalError::Store(format!("Failed to reach the portal API: {err}"))
}

#[async_trait]
impl EventStore for ApiClient {
    async fn fetch_events(&self, range: &DateRange) -> PortalResult<Vec<EventRecord>> {
        let resp = self
            .request(Method::GET, "/calendar")
            .query(&[("start", range.from_rfc3339()), ("end", range.to_rfc3339())])
            .send()
            .await
            .map_err(connection_error)?;

        let data: EventsData = Self::decode(resp).await?;
        Ok(data.events)
    }

    async fn create_event(&self, event: &NewEvent) -> PortalResult<EventRecord> {
        let resp = self
            .request(Method::POST, "/calendar")
            .json(event)
            .send()
            .await
            .map_err(connection_error)?;

        let data: EventData = Self::decode(resp).await?;
        Ok(data.event)
    }

    async fn update_event(&self, id: &str, changes: &EventChanges) -> PortalResult<EventRecord> {
        let resp = self
            .request(Method::PUT, &format!("/calendar/{id}"))
            .json(changes)
            .send()
            .await
            .map_err(connection_error)?;

        let data: EventData = Self::decode(resp).await?;
        Ok(data.event)
    }

    async fn delete_event(&self, id: &str) -> PortalResult<()> {
        let resp = self
            .request(Method::DELETE, &format!("/calendar/{id}"))
            .send()
            .await
            .map_err(connection_error)?;

        Self::check(resp).await
    }
}
