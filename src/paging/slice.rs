//! Resolved slice views over a paged list.

use crate::error::Result;
use futures::stream::{self, Stream, StreamExt, TryStreamExt};

use super::list::PagedList;

/// A lazy, finite view over `[start, stop)` of a [`PagedList`], taking every
/// `step`-th element.
///
/// Bounds are already resolved against the list length, so iteration never
/// runs out of range. The view holds no elements of its own: each iteration
/// walks the parent list, which serves cached pages without re-fetching.
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a, T> {
    list: &'a PagedList<T>,
    start: usize,
    stop: usize,
    step: usize,
}

impl<'a, T> Slice<'a, T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new(list: &'a PagedList<T>, start: usize, stop: usize, step: usize) -> Self {
        Self {
            list,
            start,
            stop,
            step,
        }
    }

    /// Number of elements the slice selects.
    pub fn len(&self) -> usize {
        if self.stop > self.start {
            (self.stop - self.start - 1) / self.step + 1
        } else {
            0
        }
    }

    /// Whether the slice selects no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy stream over the selected elements, in order.
    ///
    /// Elements are fetched (or served from cache) one at a time as the
    /// stream is polled; calling this again restarts iteration from the
    /// beginning against the same cache.
    pub fn stream(&self) -> impl Stream<Item = Result<T>> + 'a {
        let list = self.list;
        stream::iter((self.start..self.stop).step_by(self.step))
            .then(move |index| list.get_resolved(index))
    }

    /// Collect the selected elements into a `Vec`.
    pub async fn to_vec(&self) -> Result<Vec<T>> {
        self.stream().try_collect().await
    }
}
