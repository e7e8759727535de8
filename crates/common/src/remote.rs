//! HTTP client for the remote user-management service.
//!
//! Every call is a single request with no retries. Any 2xx answer is a
//! success and yields the decoded body; a transport error, non-2xx status
//! or undecodable body is reported as a [`CoreError`].

use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::CoreError;

#[derive(Clone, Debug)]
pub struct RemoteUsersClient {
    http: Client,
    base: Url,
}

impl RemoteUsersClient {
    /// Build a client for the given collection URL, e.g. `https://host/users`.
    pub fn new(users_url: &str) -> Result<Self, CoreError> {
        let base = Url::parse(users_url).map_err(|e| CoreError::Parse(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(CoreError::Parse(format!("{users_url} cannot be used as a base url")));
        }
        Ok(Self { http: Client::new(), base })
    }

    /// `{base}/{id}` with `id` percent-encoded as a single path segment.
    pub fn member_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }

    pub async fn list(&self) -> Result<Value, CoreError> {
        self.send_json(Method::GET, self.base.clone(), None).await
    }

    pub async fn create(&self, body: &Value) -> Result<Value, CoreError> {
        self.send_json(Method::POST, self.base.clone(), Some(body)).await
    }

    pub async fn update(&self, id: &str, body: &Value) -> Result<Value, CoreError> {
        self.send_json(Method::PUT, self.member_url(id), Some(body)).await
    }

    /// The remote body is ignored; only the status decides success.
    pub async fn delete(&self, id: &str) -> Result<(), CoreError> {
        let url = self.member_url(id);
        self.send(Method::DELETE, url, None).await?;
        Ok(())
    }

    async fn send_json(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value, CoreError> {
        self.send(method, url, body)
            .await?
            .json::<Value>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))
    }

    async fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<reqwest::Response, CoreError> {
        debug!(%method, %url, "remote request");
        let mut req = self.http.request(method, url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Status(status.as_u16()));
        }
        debug!(%status, "remote response");
        Ok(resp)
    }
}
