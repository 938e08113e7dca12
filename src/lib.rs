//! # Fakturoid API client
//!
//! An async Rust client for the [Fakturoid](https://www.fakturoid.cz/) invoicing
//! service REST API v2: accounts, subjects, invoices, generators and messages,
//! with lazily-loaded paginated collections.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fakturoid::{Fakturoid, InvoiceFilter, InvoiceStatus, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fa = Fakturoid::new("myslug", "me@example.com", "9ACA7")?;
//!
//!     let account = fa.account().await?;
//!     println!("billing as {account}");
//!
//!     // Paid invoices as a lazily-loaded collection; pages are fetched
//!     // on demand and cached for the life of the list.
//!     let invoices = fa.invoices(InvoiceFilter::new().status(InvoiceStatus::Paid));
//!     println!("{} paid invoices", invoices.len().await?);
//!     let latest = invoices.get(0).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       Fakturoid                           │
//! │  account()  subjects()  invoices()  generators()  save()  │
//! └───────────────────────────────────────────────────────────┘
//!            │                              │
//! ┌──────────┴───────────┐      ┌───────────┴──────────────┐
//! │       client         │      │         paging           │
//! │  basic auth, routing │◄─────┤  PagedList / Slice       │
//! │  Link header hints   │      │  lazy fetch, page cache  │
//! └──────────────────────┘      └──────────────────────────┘
//!            │
//! ┌──────────┴───────────┐
//! │       models         │
//! │  serde domain types  │
//! └──────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Lazily-loaded paginated collections
pub mod paging;

/// Domain models (accounts, subjects, invoices, ...)
pub mod models;

/// HTTP client and typed API endpoints
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Fakturoid, FakturoidBuilder, GeneratorFilter, InvoiceFilter, SubjectFilter};
pub use error::{Error, Result};
pub use models::{
    Account, BankAccount, Entity, Generator, Invoice, InvoiceLine, Message, Subject,
};
pub use paging::{FetchedPage, PageFetcher, PagedList, Slice};
pub use types::{InvoiceEvent, InvoiceStatus};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
