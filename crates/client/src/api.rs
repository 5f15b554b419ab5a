//! Shared HTTP plumbing for the data clients.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use url::Url;

use inventory_core::MessageResponse;

use crate::auth::AuthClient;
use crate::error::ClientError;
use crate::items::ItemClient;
use crate::session::SessionStore;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Inventory API client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client for the API at `base_url`.
    ///
    /// A base URL with a path prefix (e.g. `https://host/api`) is treated as a
    /// directory so endpoint paths are appended to it.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `base_url` cannot be parsed, or
    /// `ClientError::Http` if the HTTP client fails to build.
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url,
                session,
            }),
        })
    }

    /// Item operations.
    #[must_use]
    pub const fn items(&self) -> ItemClient<'_> {
        ItemClient::new(self)
    }

    /// Login/logout operations.
    #[must_use]
    pub const fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(self)
    }

    /// The local session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Start a request with the stored bearer token attached.
    pub(crate) async fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        let session = self.inner.session.load().await?;
        let token = session.as_ref().map_or("", |s| s.bearer_token());

        tracing::debug!(%method, %url, "Sending request");
        Ok(self.inner.http.request(method, url).bearer_auth(token))
    }

    /// Start a request without any session header.
    pub(crate) fn anonymous(&self, method: reqwest::Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "Sending request");
        Ok(self.inner.http.request(method, url))
    }
}

/// Turn a non-success response into a `ClientError`.
///
/// The server's `{ "message": ... }` body is used when present.
pub(crate) async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<MessageResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    Err(match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        _ => ClientError::Api {
            status: status.as_u16(),
            message,
        },
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base, SessionStore::new("unused-session.json")).unwrap()
    }

    #[test]
    fn test_url_joins_against_root() {
        let api = client("http://127.0.0.1:3000");
        assert_eq!(
            api.url("items/4").unwrap().as_str(),
            "http://127.0.0.1:3000/items/4"
        );
    }

    #[test]
    fn test_url_keeps_path_prefix() {
        let api = client("https://example.com/api");
        assert_eq!(api.base_url().as_str(), "https://example.com/api/");
        assert_eq!(
            api.url("auth/login").unwrap().as_str(),
            "https://example.com/api/auth/login"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new("not a url", SessionStore::new("unused"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
