//! HTTP transport client.
//!
//! Wraps outbound calls to the backend: attaches the bearer credential when
//! one is present, maps non-2xx statuses into [`ApiError`], and handles 401
//! globally by clearing the injected [`SessionStore`] and broadcasting
//! [`SessionEvent::Unauthorized`] before propagating the failure. Every
//! other error is returned unchanged for the caller to interpret.

use crate::error::{ApiError, ApiResult};
use crate::session::{SessionEvent, SessionStore};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, warn};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct Transport {
    base_url: Url,
    http: reqwest::Client,
    session: SessionStore,
    events: broadcast::Sender<SessionEvent>,
}

impl Transport {
    /// Build a transport against `base_url` with an injected session store.
    pub fn new(base_url: &str, session: SessionStore) -> ApiResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::Network(format!("invalid base url: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let (events, _) = broadcast::channel(16);

        Ok(Self {
            base_url,
            http,
            session,
            events,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Subscribe to session events (401 handling lives with the shell).
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let req = self.request(Method::GET, path)?.query(query);
        self.json(self.execute(req).await?).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.request(Method::POST, path)?.json(body);
        self.json(self.execute(req).await?).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.request(Method::PUT, path)?.json(body);
        self.json(self.execute(req).await?).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let req = self.request(Method::PATCH, path)?.json(body);
        self.json(self.execute(req).await?).await
    }

    /// PATCH without a body (activate has none).
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.request(Method::PATCH, path)?;
        self.json(self.execute(req).await?).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let req = self.request(Method::DELETE, path)?;
        self.execute(req).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> ApiResult<reqwest::RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::Network(format!("invalid request path: {e}")))?;
        debug!(%method, %url, "dispatching request");

        let mut req = self.http.request(method, url);
        // Absence of a token is not an error; the backend decides.
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        Ok(req)
    }

    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            // Clear first, then notify the shell, then fail the caller.
            self.session.clear();
            let _ = self.events.send(SessionEvent::Unauthorized);
            warn!("unauthorized response, session cleared");
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "backend returned error status");
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        Ok(response)
    }

    async fn json<T: DeserializeOwned>(&self, response: reqwest::Response) -> ApiResult<T> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("session", &self.session)
            .finish()
    }
}
