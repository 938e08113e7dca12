//! The paged list adapter and its fetcher seam.

use crate::error::{Error, Result};
use crate::types::StringMap;
use async_trait::async_trait;
use futures::stream::{self, Stream, TryStreamExt};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::slice::Slice;

/// Number of elements the server returns per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One fetched page of decoded records plus response metadata.
#[derive(Debug, Clone)]
pub struct FetchedPage<T> {
    /// Decoded records in server-returned order.
    pub items: Vec<T>,
    /// Total page count taken from the response's `rel="last"` Link hint,
    /// absent when the server sent no hint.
    pub total_pages: Option<usize>,
}

/// Collaborator performing the actual network call and model decoding.
///
/// Retry policy, timeouts and auth all live behind this seam; the list only
/// ever sees decoded items and an optional page-count hint.
#[async_trait]
pub trait PageFetcher<T>: Send + Sync {
    /// Fetch a single page. `query` carries the list's fixed filter
    /// parameters merged with the 1-based `page` wire parameter.
    async fn fetch_page(&self, endpoint: &str, query: &StringMap) -> Result<FetchedPage<T>>;
}

/// A paginated remote resource viewed as a lazily-loaded sequence.
///
/// Created per query (for example "invoices with status=paid"); the query is
/// immutable for the lifetime of the list. Pages are cached on first access
/// and never re-fetched or invalidated. The page count is fixed by the first
/// fetch that resolves it and is immutable afterwards.
///
/// Fetches issued by this list are strictly sequential; racing first-fetches
/// of the same page from separate tasks are not deduplicated (the fetch is an
/// idempotent read) and the first cached page wins.
pub struct PagedList<T> {
    fetcher: Arc<dyn PageFetcher<T>>,
    endpoint: String,
    query: StringMap,
    page_size: usize,
    page_count: OnceCell<usize>,
    pages: RwLock<BTreeMap<usize, Arc<[T]>>>,
}

impl<T> PagedList<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a list over `endpoint` with a fixed filter query.
    pub fn new(
        fetcher: Arc<dyn PageFetcher<T>>,
        endpoint: impl Into<String>,
        query: StringMap,
    ) -> Self {
        Self {
            fetcher,
            endpoint: endpoint.into(),
            query,
            page_size: DEFAULT_PAGE_SIZE,
            page_count: OnceCell::new(),
            pages: RwLock::new(BTreeMap::new()),
        }
    }

    /// Set the server page size. Clamped to at least 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// The configured server page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The endpoint this list reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The fixed filter query sent with every page fetch.
    pub fn query(&self) -> &StringMap {
        &self.query
    }

    /// The total page count, if a fetch has resolved it yet.
    pub fn page_count(&self) -> Option<usize> {
        self.page_count.get().copied()
    }

    /// Total element count across all pages.
    ///
    /// Resolving the count costs exactly one fetch of page 0 if no page has
    /// been fetched yet; the short last page is fetched to pin the exact
    /// length. Fetch failures propagate.
    pub async fn len(&self) -> Result<usize> {
        if self.page_count.get().is_none() {
            match self.page(0).await {
                // An out-of-range page 0 just means the resource is empty;
                // the count is resolved either way.
                Ok(_) | Err(Error::IndexOutOfRange { .. }) => {}
                Err(err) => return Err(err),
            }
        }
        let count = self.page_count.get().copied().unwrap_or(0);
        if count == 0 {
            return Ok(0);
        }
        let last = self.page(count - 1).await?;
        Ok(self.page_size * (count - 1) + last.len())
    }

    /// Whether the resource holds no elements.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Element at `index`. Negative indices resolve against [`len`](Self::len).
    pub async fn get(&self, index: i64) -> Result<T> {
        let resolved = match usize::try_from(index) {
            Ok(i) => i,
            Err(_) => {
                let len = i64::try_from(self.len().await?).unwrap_or(i64::MAX);
                usize::try_from(index.saturating_add(len))
                    .map_err(|_| Error::index_out_of_range(index))?
            }
        };
        self.get_resolved(resolved).await.map_err(|err| {
            if err.is_index_out_of_range() {
                Error::index_out_of_range(index)
            } else {
                err
            }
        })
    }

    /// Element at a resolved non-negative index.
    pub(crate) async fn get_resolved(&self, index: usize) -> Result<T> {
        let page_number = index / self.page_size;
        let offset = index % self.page_size;
        let page = self.page(page_number).await?;
        page.get(offset)
            .cloned()
            .ok_or_else(|| Error::index_out_of_range(i64::try_from(index).unwrap_or(i64::MAX)))
    }

    /// Lazy view over `[start, stop)` taking every `step`-th element, with
    /// Python slice semantics: open ends, clamping to the resolved length,
    /// negative bounds counted from the end.
    ///
    /// A non-positive `step` is unsupported and fails fast. Iterating the
    /// returned slice re-uses cached pages; a fresh iteration never
    /// re-fetches.
    pub async fn slice(
        &self,
        start: Option<i64>,
        stop: Option<i64>,
        step: Option<i64>,
    ) -> Result<Slice<'_, T>> {
        let step = step.unwrap_or(1);
        let step = usize::try_from(step)
            .ok()
            .filter(|s| *s > 0)
            .ok_or_else(|| Error::unsupported("slice step must be positive"))?;
        let len = self.len().await?;
        let start = resolve_bound(start, len, 0);
        let stop = resolve_bound(stop, len, len);
        Ok(Slice::new(self, start, stop, step))
    }

    /// Lazy stream over every element, page by page, ending at the
    /// out-of-range boundary. Cached pages are re-used across iterations.
    pub fn stream(&self) -> impl Stream<Item = Result<T>> + '_ {
        stream::try_unfold(0usize, move |page_number| async move {
            match self.page(page_number).await {
                Ok(page) => {
                    let items: Vec<Result<T>> = page.iter().cloned().map(Ok).collect();
                    Ok(Some((stream::iter(items), page_number + 1)))
                }
                Err(err) if err.is_index_out_of_range() => Ok(None),
                Err(err) => Err(err),
            }
        })
        .try_flatten()
    }

    /// Page `n` (zero-based), from cache or via one fetch.
    ///
    /// The first successful fetch fixes the page count: from the response
    /// hint when present, otherwise the just-fetched page is assumed to be
    /// the last. An exactly page-aligned resource with no hint is therefore
    /// treated as complete after its first page and under-counts; inherited
    /// behavior of the upstream Link-header convention.
    pub async fn page(&self, n: usize) -> Result<Arc<[T]>> {
        if let Some(&count) = self.page_count.get() {
            if n >= count {
                return Err(Error::index_out_of_range(
                    i64::try_from(n).unwrap_or(i64::MAX),
                ));
            }
        }

        if let Some(page) = self.pages.read().await.get(&n) {
            return Ok(Arc::clone(page));
        }

        let mut query = self.query.clone();
        query.insert("page".to_string(), (n + 1).to_string());
        debug!(endpoint = %self.endpoint, page = n + 1, "fetching page");
        let fetched = self.fetcher.fetch_page(&self.endpoint, &query).await?;

        if fetched.items.is_empty() {
            // An empty page n proves the collection has at most n pages, so a
            // larger hint would contradict the response and is capped. Empty
            // results are never cached as pages.
            let count = fetched.total_pages.map_or(n, |total| total.min(n));
            let _ = self.page_count.set(count);
            return Err(Error::index_out_of_range(
                i64::try_from(n).unwrap_or(i64::MAX),
            ));
        }

        if self.page_count.get().is_none() {
            let count = fetched.total_pages.unwrap_or(n + 1);
            let _ = self.page_count.set(count);
        }

        let page: Arc<[T]> = fetched.items.into();
        let mut pages = self.pages.write().await;
        // First fetch wins; the cache is append-only.
        Ok(Arc::clone(pages.entry(n).or_insert(page)))
    }
}

/// Resolve one slice bound against the list length, Python-style.
fn resolve_bound(bound: Option<i64>, len: usize, default: usize) -> usize {
    match bound {
        None => default,
        Some(value) => match usize::try_from(value) {
            Ok(v) => v.min(len),
            Err(_) => {
                let back = usize::try_from(value.unsigned_abs()).unwrap_or(usize::MAX);
                len.saturating_sub(back)
            }
        },
    }
}

impl<T> fmt::Debug for PagedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagedList")
            .field("endpoint", &self.endpoint)
            .field("query", &self.query)
            .field("page_size", &self.page_size)
            .field("page_count", &self.page_count.get())
            .finish_non_exhaustive()
    }
}
