//! Lazily-loaded paginated collections
//!
//! Presents a server-side paginated resource as an indexable, sliceable
//! sequence. Pages are fetched on demand through a [`PageFetcher`] and cached
//! for the life of the list; the total page count is discovered from response
//! metadata the first time any page is fetched.
//!
//! # Overview
//!
//! The server addresses pages with a 1-based `page` query parameter and
//! advertises the last page through a `Link: rel="last"` header. [`PagedList`]
//! keeps zero-based page indices internally, translates on the wire, and
//! reconciles negative indices and slice bounds against a length that is not
//! known until a page has actually been fetched.

mod list;
mod slice;

pub use list::{FetchedPage, PageFetcher, PagedList, DEFAULT_PAGE_SIZE};
pub use slice::Slice;
