//! HTTP plumbing for the Fakturoid API
//!
//! Request construction with HTTP basic auth, status-to-error mapping, and
//! the `Link` header last-page hint that drives pagination.

use crate::error::{Error, Result};
use crate::paging::{FetchedPage, PageFetcher};
use crate::types::{JsonValue, StringMap};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://app.fakturoid.cz/api/v2";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client handle for one Fakturoid account.
///
/// Cheap to clone; all clones share the underlying connection pool, so a
/// handle can be captured by any number of paged lists at once.
#[derive(Clone)]
pub struct Fakturoid {
    inner: Arc<Inner>,
}

struct Inner {
    client: Client,
    base_url: String,
    slug: String,
    email: String,
    api_key: String,
}

/// Builder for [`Fakturoid`].
#[derive(Debug, Clone)]
pub struct FakturoidBuilder {
    slug: String,
    email: String,
    api_key: String,
    base_url: String,
    user_agent: Option<String>,
    timeout: Duration,
}

impl FakturoidBuilder {
    /// Override the API root, e.g. to point at a test server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a custom User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client handle.
    pub fn build(self) -> Result<Fakturoid> {
        if self.slug.is_empty() {
            return Err(Error::config("account slug must not be empty"));
        }
        if self.email.is_empty() || self.api_key.is_empty() {
            return Err(Error::config("API credentials must not be empty"));
        }
        let base_url = self.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let user_agent = self.user_agent.unwrap_or_else(|| {
            format!(
                "{}/{} (https://github.com/kubent-solidafy/fakturoid-rs)",
                crate::NAME,
                crate::VERSION
            )
        });
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(Fakturoid {
            inner: Arc::new(Inner {
                client,
                base_url,
                slug: self.slug,
                email: self.email,
                api_key: self.api_key,
            }),
        })
    }
}

impl Fakturoid {
    /// Create a client for `slug` with default settings.
    pub fn new(
        slug: impl Into<String>,
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        Self::builder(slug, email, api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        slug: impl Into<String>,
        email: impl Into<String>,
        api_key: impl Into<String>,
    ) -> FakturoidBuilder {
        FakturoidBuilder {
            slug: slug.into(),
            email: email.into(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The account slug this client talks to.
    pub fn slug(&self) -> &str {
        &self.inner.slug
    }

    /// Full URL for an endpoint path, e.g. `subjects/28` or `invoices`.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/accounts/{}/{}.json",
            self.inner.base_url, self.inner.slug, endpoint
        )
    }

    pub(crate) async fn get(&self, endpoint: &str, query: &StringMap) -> Result<Response> {
        self.request(Method::GET, endpoint, query, None).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &StringMap,
    ) -> Result<T> {
        let response = self.get(endpoint, query).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post(
        &self,
        endpoint: &str,
        query: &StringMap,
        body: JsonValue,
    ) -> Result<Response> {
        self.request(Method::POST, endpoint, query, Some(body)).await
    }

    pub(crate) async fn put(&self, endpoint: &str, body: JsonValue) -> Result<Response> {
        self.request(Method::PUT, endpoint, &StringMap::new(), Some(body))
            .await
    }

    pub(crate) async fn delete_request(&self, endpoint: &str) -> Result<Response> {
        self.request(Method::DELETE, endpoint, &StringMap::new(), None)
            .await
    }

    /// Issue one request and map non-success statuses to errors, surfacing
    /// the server's validation payload when the body carries one.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &StringMap,
        body: Option<JsonValue>,
    ) -> Result<Response> {
        let url = self.endpoint_url(endpoint);
        let mut request = self
            .inner
            .client
            .request(method.clone(), &url)
            .basic_auth(&self.inner.email, Some(&self.inner.api_key));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "request succeeded");
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();
        if let Ok(json) = serde_json::from_str::<JsonValue>(&body_text) {
            if let Some(errors) = json.get("errors") {
                return Err(Error::Api {
                    errors: errors.clone(),
                });
            }
        }
        Err(Error::http_status(status.as_u16(), body_text))
    }
}

impl std::fmt::Debug for Fakturoid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fakturoid")
            .field("base_url", &self.inner.base_url)
            .field("slug", &self.inner.slug)
            .field("email", &self.inner.email)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T> PageFetcher<T> for Fakturoid
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch_page(&self, endpoint: &str, query: &StringMap) -> Result<FetchedPage<T>> {
        let response = self.get(endpoint, query).await?;
        let total_pages = last_page_hint(response.headers());
        let items: Vec<T> = response.json().await?;
        debug!(endpoint, count = items.len(), ?total_pages, "decoded page");
        Ok(FetchedPage { items, total_pages })
    }
}

/// Extract the total page count from a response's `Link` header.
///
/// The API advertises the final page as `<...?page=N>; rel="last"`; the
/// header is absent when the whole collection fits on one page.
pub(crate) fn last_page_hint(headers: &HeaderMap) -> Option<usize> {
    let header = headers.get("link")?.to_str().ok()?;
    let last_url = parse_link_header(header, "last")?;
    let url = Url::parse(&last_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// Parse a Link header and extract the URL for the given rel.
pub(crate) fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // Link header format: <url>; rel="next", <url>; rel="last"
    for part in header.split(',') {
        let part = part.trim();
        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = Some(stripped.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r == target_rel {
                return Some(u.to_string());
            }
        }
    }

    None
}
