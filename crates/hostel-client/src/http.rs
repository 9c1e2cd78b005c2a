//! Request plumbing shared by the resource groups.
//!
//! One method per HTTP verb, each performing exactly one request. Nothing is
//! retried or cached, and no timeout is set beyond reqwest's defaults.
//! [`Http::write`] is the variant for callers that only need to know the
//! backend applied a change.

pub(crate) use reqwest::Method;
use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use hostel_config::ApiConfig;

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub(crate) struct Http {
    client: reqwest::Client,
    base_url: Url,
}

impl Http {
    pub(crate) fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Self::with_client(client, &config.base_url)
    }

    pub(crate) fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let response = self.send(Method::GET, segments, None::<&()>).await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, segments, Some(body)).await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn put<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, segments, Some(body)).await?;
        Self::parse_response(response).await
    }

    pub(crate) async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, segments, None::<&()>).await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// POST or PUT where any 2xx counts as applied. The reply body is
    /// logged, never decoded.
    pub(crate) async fn write<B>(&self, method: Method, segments: &[&str], body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, segments, Some(body)).await?;
        let response = Self::ensure_success(response).await?;
        match response.text().await {
            Ok(text) => debug!(body_len = text.len(), "Write accepted"),
            Err(e) => warn!(error = %e, "Write accepted but reply body was unreadable"),
        }
        Ok(())
    }

    #[instrument(skip(self, segments, body), fields(path = %segments.join("/")))]
    async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(segments)?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request did not complete");
            ApiError::from(e)
        })?;

        debug!(status = response.status().as_u16(), "Response received");
        Ok(response)
    }

    /// Ensure the response has a success status code, or capture the status
    /// and body text as an [`ApiError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            warn!(status = status.as_u16(), "Backend rejected request");
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
